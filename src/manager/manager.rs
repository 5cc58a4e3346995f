use std::collections::HashMap;

use super::managererror::ManagerError;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> &HashMap<String, V>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    /// 依字母排序，方便列印。
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }
}


pub struct Manager<V> {
    map: HashMap<String, V>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new() -> Manager<V> {
        Manager { map: HashMap::new() }
    }

    /// 同名時覆蓋，回傳被取代的舊值。
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.map.insert(name.into(), value)
    }
}

impl <V> Default for Manager<V> where
    V: Clone {
    fn default() -> Self {
        Manager::new()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> &HashMap<String, V> {
        &self.map
    }
}
