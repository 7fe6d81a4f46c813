use std::fmt;
use std::sync::Arc;

use super::instance::ChartInstance;
use crate::config::SlicerConfig;
use crate::error::SlicerError;

/// Stable handle for a chart in a [`ChartRegistry`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Independent chart instances shown together, in insertion order.
#[derive(Debug)]
pub struct ChartRegistry {
    config: Arc<SlicerConfig>,
    instances: Vec<(InstanceId, ChartInstance)>,
    next_id: u64,
}

impl Default for ChartRegistry {
    fn default() -> Self {
        Self::new(SlicerConfig::default())
    }
}

impl ChartRegistry {
    /// Empty registry; new instances start from `config`.
    pub fn new(config: SlicerConfig) -> Self {
        Self {
            config: Arc::new(config),
            instances: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a chart at defaults. Existing charts are untouched.
    pub fn add_instance(&mut self) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.instances
            .push((id, ChartInstance::new(Arc::clone(&self.config))));
        log::debug!("added chart {id} ({} total)", self.instances.len());
        id
    }

    pub fn remove_instance(&mut self, id: InstanceId) -> Result<ChartInstance, SlicerError> {
        let pos = self
            .instances
            .iter()
            .position(|(i, _)| *i == id)
            .ok_or(SlicerError::UnknownInstance(id))?;
        log::debug!("removed chart {id}");
        Ok(self.instances.remove(pos).1)
    }

    pub fn get(&self, id: InstanceId) -> Option<&ChartInstance> {
        self.instances
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, inst)| inst)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut ChartInstance> {
        self.instances
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, inst)| inst)
    }

    pub fn iter(&self) -> impl Iterator<Item = (InstanceId, &ChartInstance)> {
        self.instances.iter().map(|(id, inst)| (*id, inst))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (InstanceId, &mut ChartInstance)> {
        self.instances.iter_mut().map(|(id, inst)| (*id, inst))
    }

    pub fn ids(&self) -> Vec<InstanceId> {
        self.instances.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
