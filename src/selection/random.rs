use crate::{
    catalog::table::TraitCatalog, foundation::math::RandomSource, selection::model::Selection,
};

/// Draw one option per non-empty layer, independently and uniformly.
///
/// Layers with no options are left unset.
pub fn random_selection(catalog: &TraitCatalog, rng: &mut dyn RandomSource) -> Selection {
    catalog
        .iter()
        .filter(|(_, opts)| !opts.is_empty())
        .map(|(layer, opts)| {
            let pick = rng.next_below(opts.len()).min(opts.len() - 1);
            (layer, opts[pick].locator.clone())
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/selection/random.rs"]
mod tests;
