//! Every state a dashboard page can be in, tagged with organism and view.

use serde::{Deserialize, Serialize};

use crate::{
    organism::Organism,
    views::{
        View, compare_side_by_side::CompareSideBySideState,
        compare_to_baseline::CompareToBaselineState, compare_variants::CompareVariantsState,
        sequencing_efforts::SequencingEffortsState, single_variant::SingleVariantState,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageState {
    SingleVariant(Organism, SingleVariantState),
    CompareSideBySide(Organism, CompareSideBySideState),
    SequencingEfforts(Organism, SequencingEffortsState),
    CompareVariants(Organism, CompareVariantsState),
    CompareToBaseline(Organism, CompareToBaselineState),
}

impl PageState {
    pub fn organism(&self) -> Organism {
        match self {
            PageState::SingleVariant(organism, _)
            | PageState::CompareSideBySide(organism, _)
            | PageState::SequencingEfforts(organism, _)
            | PageState::CompareVariants(organism, _)
            | PageState::CompareToBaseline(organism, _) => *organism,
        }
    }

    pub fn view(&self) -> View {
        match self {
            PageState::SingleVariant(..) => View::SingleVariant,
            PageState::CompareSideBySide(..) => View::CompareSideBySide,
            PageState::SequencingEfforts(..) => View::SequencingEfforts,
            PageState::CompareVariants(..) => View::CompareVariants,
            PageState::CompareToBaseline(..) => View::CompareToBaseline,
        }
    }
}
