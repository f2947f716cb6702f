use crate::error::{LedgerError, LedgerResult};

/// Slot that accepts exactly one successful assignment.
///
/// Unset is the initial state, set is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOnce<T> {
    field: &'static str,
    value: Option<T>,
}

impl<T> WriteOnce<T> {
    /// Empty slot for the named field.
    pub const fn new(field: &'static str) -> Self {
        Self { field, value: None }
    }

    /// Current value, if the slot has been filled.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// True once a value has been stored.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Store `value` unless the slot is already filled.
    pub fn set(&mut self, value: T) -> LedgerResult<()> {
        if self.value.is_some() {
            return Err(LedgerError::AlreadySet { field: self.field });
        }

        self.value = Some(value);
        Ok(())
    }

    /// Fail with [`LedgerError::AlreadySet`] when the slot is filled, without touching it.
    pub fn ensure_unset(&self) -> LedgerResult<()> {
        if self.is_set() {
            Err(LedgerError::AlreadySet { field: self.field })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_set_wins() {
        let mut slot = WriteOnce::new("score");
        assert!(!slot.is_set());
        slot.set(10).unwrap();
        assert_eq!(
            slot.set(20).unwrap_err(),
            LedgerError::AlreadySet { field: "score" }
        );
        assert_eq!(slot.get(), Some(&10));
    }

    #[test]
    fn ensure_unset_reports_lock() {
        let mut slot = WriteOnce::new("title");
        assert!(slot.ensure_unset().is_ok());
        slot.set("Tetris").unwrap();
        assert!(slot.ensure_unset().is_err());
    }
}
