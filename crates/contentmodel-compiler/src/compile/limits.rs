//! Capacity limits checked before compilation.

use crate::model::{ContentToken, ModelGroup};

use super::error::CompileError;

/// SGML capacity quantities bounding the size of a content model.
///
/// Defaults follow the reference quantity set: GRPCNT 32, GRPGTCNT 96,
/// GRPLVL 16. Declarations that raise these quantities configure them here;
/// `unlimited()` disables every check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelLimits {
    /// Maximum members in a single group.
    pub(crate) grpcnt: Option<usize>,
    /// Maximum grand total of group and token occurrences.
    pub(crate) grpgtcnt: Option<usize>,
    /// Maximum group nesting level.
    pub(crate) grplvl: Option<usize>,
}

impl Default for ModelLimits {
    fn default() -> Self {
        Self {
            grpcnt: Some(32),
            grpgtcnt: Some(96),
            grplvl: Some(16),
        }
    }
}

impl ModelLimits {
    /// Create limits with the reference quantities.
    pub fn new() -> Self {
        Self::default()
    }

    /// No capacity checks at all.
    pub fn unlimited() -> Self {
        Self {
            grpcnt: None,
            grpgtcnt: None,
            grplvl: None,
        }
    }

    pub fn grpcnt(mut self, limit: usize) -> Self {
        self.grpcnt = Some(limit);
        self
    }

    pub fn grpgtcnt(mut self, limit: usize) -> Self {
        self.grpgtcnt = Some(limit);
        self
    }

    pub fn grplvl(mut self, limit: usize) -> Self {
        self.grplvl = Some(limit);
        self
    }

    pub fn get_grpcnt(&self) -> Option<usize> {
        self.grpcnt
    }
    pub fn get_grpgtcnt(&self) -> Option<usize> {
        self.grpgtcnt
    }
    pub fn get_grplvl(&self) -> Option<usize> {
        self.grplvl
    }

    /// Check `model` against every configured limit.
    pub fn check(&self, model: &ModelGroup) -> Result<(), CompileError> {
        if let Some(limit) = self.grplvl {
            let level = model.nesting_level();
            if level > limit {
                return Err(CompileError::GroupLevelExceeded { level, limit });
            }
        }

        if let Some(limit) = self.grpgtcnt {
            let count = model.group_token_count();
            if count > limit {
                return Err(CompileError::GroupTokenCountExceeded { count, limit });
            }
        }

        if let Some(limit) = self.grpcnt {
            check_group_count(model, limit)?;
        }

        Ok(())
    }
}

fn check_group_count(group: &ModelGroup, limit: usize) -> Result<(), CompileError> {
    let count = group.members.len();
    if count > limit {
        return Err(CompileError::GroupCountExceeded { count, limit });
    }
    for member in &group.members {
        if let ContentToken::Group(inner) = member {
            check_group_count(inner, limit)?;
        }
    }
    Ok(())
}
