
/// 四捨五入到 `digits` 位有效數字；0 與非有限值原樣回傳。
pub fn round_significant(x: f64, digits: u32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }

    let shift = digits as i32 - 1 - x.abs().log10().floor() as i32;

    let pow1: f64;
    let pow2: f64;

    if shift > 300 {
            /* x 為次正規數時 10^shift 會 overflow，拆成兩段 */
        pow1 = 10f64.powi(shift - 300);
        pow2 = 1e300;
    }
    else {
        pow1 = 10f64.powi(shift);
        pow2 = 1.0;
    }

    let z = ((x * pow1) * pow2).round();
    (z / pow2) / pow1
}
