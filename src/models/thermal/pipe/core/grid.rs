use uom::si::f64::Length;

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Uniform finite-volume grid along the pipe axis.
///
/// Node `i` is the control volume `[i·dx, (i+1)·dx]`, represented by its
/// center `(i + ½)·dx`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    spacing: Length,
    centers: Vec<Length>,
}

impl Grid {
    /// Divides `length` into `nodes` equal control volumes.
    pub(super) fn uniform(
        length: Constrained<Length, StrictlyPositive>,
        nodes: Constrained<usize, StrictlyPositive>,
    ) -> Self {
        let nodes = nodes.into_inner();

        #[allow(clippy::cast_precision_loss)]
        let spacing = length.into_inner() / nodes as f64;

        let centers = (0..nodes)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let i = i as f64;
                spacing * (i + 0.5)
            })
            .collect();

        Self { spacing, centers }
    }

    /// Returns the control volume width `dx`.
    #[must_use]
    pub fn spacing(&self) -> Length {
        self.spacing
    }

    /// Returns the node center positions, inlet first.
    #[must_use]
    pub fn centers(&self) -> &[Length] {
        &self.centers
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Returns `true` if the grid has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}
