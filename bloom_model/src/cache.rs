/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “BloomWatch” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! bounded LRU cache of derivation results. Since derivation is pure, (kind, date, crop)
//! fully determines the output and cached entries never go stale - they are only evicted
//! to bound memory when the host scrubs through many timeline dates.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use chrono::NaiveDate;

use crate::crops::CropType;
use crate::{derive_dataset, DatasetKind, DerivedDataset, RawDataset};

pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug,Clone,PartialEq,Eq,Hash)]
pub struct CacheKey {
    pub kind: DatasetKind,
    pub date: NaiveDate,
    pub crop_id: Option<String>
}

impl CacheKey {
    pub fn new (kind: DatasetKind, date: NaiveDate, crop: Option<&CropType>)->Self {
        CacheKey { kind, date, crop_id: crop.map(|c| c.id.clone()) }
    }
}

pub struct DerivationCache {
    map: HashMap<CacheKey, Arc<DerivedDataset>>,
    recency: VecDeque<CacheKey>,  // front is least recently used
    max_capacity: usize,

    hits: u64,
    misses: u64
}

impl DerivationCache {
    pub fn new (max_capacity: usize)->Self {
        DerivationCache {
            map: HashMap::with_capacity(max_capacity),
            recency: VecDeque::with_capacity(max_capacity),
            max_capacity: max_capacity.max(1),
            hits: 0,
            misses: 0
        }
    }

    pub fn len (&self)->usize { self.map.len() }
    pub fn is_empty (&self)->bool { self.map.is_empty() }
    pub fn capacity (&self)->usize { self.max_capacity }
    pub fn hits (&self)->u64 { self.hits }
    pub fn misses (&self)->u64 { self.misses }

    /// cheap clone of the cached dataset handle, refreshing its recency
    pub fn get (&mut self, key: &CacheKey)->Option<Arc<DerivedDataset>> {
        if let Some(ds) = self.map.get(key).cloned() {
            self.touch(key);
            self.hits += 1;
            Some(ds)
        } else {
            self.misses += 1;
            None
        }
    }

    pub fn insert (&mut self, key: CacheKey, ds: Arc<DerivedDataset>) {
        if self.map.insert( key.clone(), ds).is_none() {
            self.recency.push_back(key);
            if self.map.len() > self.max_capacity {
                if let Some(lru) = self.recency.pop_front() {
                    self.map.remove(&lru);
                }
            }
        } else {
            self.touch(&key);
        }
    }

    /// look up or derive-and-insert. This is the main entry point of the host facing API.
    pub fn get_or_derive (&mut self, raw: &RawDataset, date: NaiveDate, crop: Option<&CropType>)->Arc<DerivedDataset> {
        let key = CacheKey::new( raw.kind, date, crop);
        if let Some(ds) = self.get(&key) {
            return ds
        }

        let ds = Arc::new( derive_dataset( raw, date, crop));
        self.insert( key, ds.clone());
        ds
    }

    pub fn clear (&mut self) {
        self.map.clear();
        self.recency.clear();
    }

    fn touch (&mut self, key: &CacheKey) {
        if let Some(pos) = self.recency.iter().position( |k| k == key) {
            if let Some(k) = self.recency.remove(pos) {
                self.recency.push_back(k);
            }
        }
    }
}

impl Default for DerivationCache {
    fn default()->Self { DerivationCache::new( DEFAULT_CAPACITY) }
}
