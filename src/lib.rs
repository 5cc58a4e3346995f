pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
    pub mod functionmanager;
}

pub mod math {
    pub mod differentiation {
        pub mod domainerror;
        pub mod evaluationfunction;
        pub mod derivativeestimator;
        pub mod stepsizesweep;
        pub mod errorcurve;
        pub mod sweepresult;
        pub mod convergence;
    }
    pub mod round;
}

pub mod report {
    pub mod sweepreport;
}

pub mod study {
    pub mod differentiationstudy;
}
