use serde::{Deserialize, Serialize};

use outline_core::PartId;

use crate::transform::Mirror;

/// One unit of drawing work: a part stroked under a mirror sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderItem {
    pub mirror: Mirror,
    pub part: PartId,
}

/// Ordered list of work items. Items are drawn front to back, so a later item
/// overwrites pixels shared with an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    /// Mirror passes, in order.
    pub const PASSES: [Mirror; 2] = [Mirror::Left, Mirror::Right];

    /// Left pass over every part, then the right pass, parts in [`PartId::ALL`] order.
    pub fn mirrored() -> Self {
        let items = Self::PASSES
            .into_iter()
            .flat_map(|mirror| PartId::ALL.into_iter().map(move |part| RenderItem { mirror, part }))
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for RenderPlan {
    fn default() -> Self {
        Self::mirrored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_plan_order() {
        let plan = RenderPlan::mirrored();
        assert_eq!(plan.len(), 6);

        let expected = [
            (Mirror::Left, PartId::Fuselage),
            (Mirror::Left, PartId::MainWing),
            (Mirror::Left, PartId::StabWing),
            (Mirror::Right, PartId::Fuselage),
            (Mirror::Right, PartId::MainWing),
            (Mirror::Right, PartId::StabWing),
        ];
        for (item, (mirror, part)) in plan.items.iter().zip(expected) {
            assert_eq!(item.mirror, mirror);
            assert_eq!(item.part, part);
        }
    }
}
