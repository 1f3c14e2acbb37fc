use crate::global_constants::{COPY_LABEL_DONE, COPY_LABEL_IDLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Hex,
    Rgb,
    Hsl,
}

impl CopyTarget {
    pub const ALL: [CopyTarget; 3] = [CopyTarget::Hex, CopyTarget::Rgb, CopyTarget::Hsl];

    fn index(&self) -> usize {
        match self {
            CopyTarget::Hex => 0,
            CopyTarget::Rgb => 1,
            CopyTarget::Hsl => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct LabelSlot {
    generation: u64,
    is_copied: bool,
}

/// Per-target "copied!" labels whose pending reset is replaced by every new copy.
#[derive(Debug, Clone, Default)]
pub struct CopyLabelResets {
    slots: [LabelSlot; 3],
}

impl CopyLabelResets {
    /// Flips the label to copied and returns the token the delayed reset must present.
    pub fn schedule(&mut self, target: CopyTarget) -> u64 {
        let slot = &mut self.slots[target.index()];
        slot.generation = slot.generation.wrapping_add(1);
        slot.is_copied = true;
        slot.generation
    }

    /// Returns true when the reset applied; stale tokens are ignored.
    pub fn expire(&mut self, target: CopyTarget, generation: u64) -> bool {
        let slot = &mut self.slots[target.index()];
        if slot.generation != generation || !slot.is_copied {
            return false;
        }
        slot.is_copied = false;
        true
    }

    pub fn is_copied(&self, target: CopyTarget) -> bool {
        self.slots[target.index()].is_copied
    }

    pub fn label(&self, target: CopyTarget) -> &'static str {
        if self.is_copied(target) {
            COPY_LABEL_DONE
        } else {
            COPY_LABEL_IDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_start_idle() {
        let resets = CopyLabelResets::default();

        for target in CopyTarget::ALL {
            assert_eq!(resets.label(target), COPY_LABEL_IDLE);
        }
    }

    #[test]
    fn test_schedule_then_expire_restores_label() {
        let mut resets = CopyLabelResets::default();

        let token = resets.schedule(CopyTarget::Hex);
        assert_eq!(resets.label(CopyTarget::Hex), COPY_LABEL_DONE);

        assert!(resets.expire(CopyTarget::Hex, token));
        assert_eq!(resets.label(CopyTarget::Hex), COPY_LABEL_IDLE);
    }

    #[test]
    fn test_second_copy_supersedes_pending_reset() {
        let mut resets = CopyLabelResets::default();

        let first = resets.schedule(CopyTarget::Rgb);
        let second = resets.schedule(CopyTarget::Rgb);

        assert!(!resets.expire(CopyTarget::Rgb, first));
        assert_eq!(resets.label(CopyTarget::Rgb), COPY_LABEL_DONE);

        assert!(resets.expire(CopyTarget::Rgb, second));
        assert_eq!(resets.label(CopyTarget::Rgb), COPY_LABEL_IDLE);
    }

    #[test]
    fn test_targets_are_independent() {
        let mut resets = CopyLabelResets::default();

        let hex = resets.schedule(CopyTarget::Hex);
        let hsl = resets.schedule(CopyTarget::Hsl);

        assert!(resets.expire(CopyTarget::Hex, hex));
        assert_eq!(resets.label(CopyTarget::Hsl), COPY_LABEL_DONE);
        assert_eq!(resets.label(CopyTarget::Rgb), COPY_LABEL_IDLE);

        assert!(!resets.expire(CopyTarget::Rgb, hsl));
        assert!(resets.expire(CopyTarget::Hsl, hsl));
    }

    #[test]
    fn test_expire_twice_is_a_no_op() {
        let mut resets = CopyLabelResets::default();
        let token = resets.schedule(CopyTarget::Hsl);

        assert!(resets.expire(CopyTarget::Hsl, token));
        assert!(!resets.expire(CopyTarget::Hsl, token));
    }
}
