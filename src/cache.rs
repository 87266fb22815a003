//! Holder for the finished lambda set between the chain and the renderer.
//!
//! The cache is an ordinary value owned by the driver. It is filled once after
//! the chain completes and read during rendering.

use crate::model::{Lambda, LambdaType};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct LambdaCache {
    lambdas: Vec<Lambda>,
}

impl LambdaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection.
    pub fn set_lambdas(&mut self, lambdas: Vec<Lambda>) {
        self.lambdas = lambdas;
    }

    /// Current collection; empty until [`LambdaCache::set_lambdas`] is called.
    pub fn lambdas(&self) -> &[Lambda] {
        &self.lambdas
    }

    pub fn len(&self) -> usize {
        self.lambdas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lambdas.is_empty()
    }

    /// Look up an entity by its simple interface name.
    pub fn find(&self, name: &str) -> Option<&Lambda> {
        self.lambdas.iter().find(|l| l.name() == Some(name))
    }

    /// Entity count per functional shape.
    pub fn counts_by_kind(&self) -> BTreeMap<LambdaType, usize> {
        let mut counts = BTreeMap::new();
        for lambda in &self.lambdas {
            *counts.entry(lambda.kind()).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<Lambda>> for LambdaCache {
    fn from(lambdas: Vec<Lambda>) -> Self {
        Self { lambdas }
    }
}
