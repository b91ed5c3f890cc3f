use std::sync::Arc;

use super::*;

/// Cycles through a fixed list of draws.
struct Script {
    draws: Vec<usize>,
    at: usize,
}

impl Script {
    fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.to_vec(),
            at: 0,
        }
    }
}

impl RandomSource for Script {
    fn next_below(&mut self, bound: usize) -> usize {
        let v = self.draws[self.at % self.draws.len()];
        self.at += 1;
        v % bound
    }
}

fn loaded(character: CharacterType) -> StudioState {
    let mut rng = Rng64::new(5);
    StudioState::new(character)
        .apply(Action::SetCatalog(TraitCatalog::for_type(character)), &mut rng)
        .apply(Action::SetLoading(false), &mut rng)
}

#[test]
fn initial_state_is_loading_and_empty() {
    let s = StudioState::default();
    assert!(s.is_loading());
    assert!(s.selection().is_empty());
    assert!(s.catalog().is_empty());
    assert_eq!(s.generation_count(), 0);
    assert_eq!(s.character(), CharacterType::GoldenPredator);
}

#[test]
fn randomize_is_noop_without_catalog_or_while_generating() {
    let mut rng = Rng64::new(1);
    let s = StudioState::default().apply(Action::RandomizeTraits, &mut rng);
    assert!(s.selection().is_empty());
    assert_eq!(s.generation_count(), 0);

    let s = loaded(CharacterType::Prey).apply(Action::SetGenerating(true), &mut rng);
    let before = s.selection().clone();
    let s = s.apply(Action::RandomizeTraits, &mut rng);
    assert_eq!(s.selection(), &before);
    assert_eq!(s.generation_count(), 0);
}

#[test]
fn randomize_draws_marks_generating_and_counts() {
    let mut rng = Rng64::new(9);
    let s = loaded(CharacterType::Prey).apply(Action::RandomizeTraits, &mut rng);
    assert!(s.is_generating());
    assert_eq!(s.generation_count(), 1);
    assert_eq!(s.selection().len(), 6);
    for (layer, loc) in s.selection().iter() {
        assert!(s.catalog().contains(layer, loc));
    }
}

#[test]
fn change_type_replaces_catalog_and_selection_together() {
    let mut rng = Rng64::new(3);
    let s = loaded(CharacterType::GoldenPredator).apply(Action::RandomizeTraits, &mut rng);
    let s = s.apply(Action::SetGenerating(false), &mut rng);

    let s = s.apply(Action::ChangeType(-1), &mut rng);
    assert_eq!(s.character(), CharacterType::Prey);
    assert_eq!(s.catalog().character(), Some(CharacterType::Prey));
    assert_eq!(
        s.selection().layers().collect::<Vec<_>>(),
        CharacterType::Prey.layers().to_vec()
    );
    for (_, loc) in s.selection().iter() {
        assert_eq!(loc.decode().map(|d| d.0), Some(CharacterType::Prey));
    }
    assert!(s.is_generating());
    assert_eq!(s.generation_count(), 2);

    let s = s.apply(Action::ChangeType(1), &mut rng);
    assert_eq!(s.character(), CharacterType::GoldenPredator);
}

#[test]
fn change_type_complete_is_idempotent() {
    let mut rng = Rng64::new(4);
    let catalog = TraitCatalog::for_type(CharacterType::Predator);
    let selection = random_selection(&catalog, &mut rng);
    let action = Action::ChangeTypeComplete {
        character: CharacterType::Predator,
        catalog,
        selection: selection.clone(),
    };

    let once = loaded(CharacterType::Prey).apply(action.clone(), &mut rng);
    let twice = once.clone().apply(action, &mut rng);
    assert_eq!(once.character(), CharacterType::Predator);
    assert_eq!(once.selection(), &selection);
    assert_eq!(once.generation_count(), twice.generation_count());
    assert_eq!(once.selection(), twice.selection());
    assert_eq!(once.catalog(), twice.catalog());
}

#[test]
fn change_type_complete_rejects_mismatched_catalog() {
    let mut rng = Rng64::new(4);
    let s = loaded(CharacterType::Prey).apply(
        Action::ChangeTypeComplete {
            character: CharacterType::Predator,
            catalog: TraitCatalog::for_type(CharacterType::GoldenPrey),
            selection: Selection::new(),
        },
        &mut rng,
    );
    assert_eq!(s.character(), CharacterType::Prey);
    assert_eq!(s.catalog().character(), Some(CharacterType::Prey));
}

#[test]
fn select_trait_overwrites_one_layer_and_closes_picker() {
    let mut rng = Script::new(&[0]);
    let s = loaded(CharacterType::Predator)
        .apply(Action::RandomizeTraits, &mut rng)
        .apply(Action::SetPickerVisible(true), &mut rng);
    let before = s.selection().clone();

    let wolf = AssetLocator::new(CharacterType::Predator, Layer::Head, "Wolf");
    let s = s.apply(
        Action::SelectTrait {
            layer: Layer::Head,
            locator: wolf.clone(),
        },
        &mut rng,
    );
    assert!(!s.picker_visible());
    assert_eq!(s.selection().get(Layer::Head), Some(&wolf));
    for layer in Layer::ALL.into_iter().filter(|l| *l != Layer::Head) {
        assert_eq!(s.selection().get(layer), before.get(layer));
    }
}

#[test]
fn select_trait_from_another_type_is_ignored() {
    let mut rng = Script::new(&[0]);
    let s = loaded(CharacterType::Predator).apply(Action::RandomizeTraits, &mut rng);
    let before = s.selection().clone();
    let cow = AssetLocator::new(CharacterType::Prey, Layer::Body, "Cow");
    let s = s.apply(
        Action::SelectTrait {
            layer: Layer::Body,
            locator: cow,
        },
        &mut rng,
    );
    assert_eq!(s.selection(), &before);
}

#[test]
fn overlay_patch_merges() {
    let mut rng = Rng64::new(0);
    let s = StudioState::default()
        .apply(Action::UpdateOverlay(OverlayPatch::top("GM")), &mut rng)
        .apply(Action::UpdateOverlay(OverlayPatch::font_size(56)), &mut rng);
    assert_eq!(s.overlay().top, "GM");
    assert_eq!(s.overlay().font_size, 56);
    assert_eq!(s.overlay().preset, "Bold Impact");
}

#[test]
fn favorites_are_bounded_through_transitions() {
    let mut rng = Rng64::new(0);
    let mut s = StudioState::default();
    for g in 0..7u64 {
        s = s.apply(
            Action::AddFavorite(Favorite {
                png: Arc::from(vec![g as u8]),
                generation: g,
            }),
            &mut rng,
        );
    }
    assert_eq!(s.favorites().len(), 5);
    assert_eq!(s.favorites().latest().map(|f| f.generation), Some(6));
}

#[test]
fn complete_initial_generation_finishes_startup() {
    let mut rng = Rng64::new(2);
    let s = loaded(CharacterType::GoldenPrey).apply(Action::SetLoading(true), &mut rng);
    let selection = random_selection(s.catalog(), &mut rng);
    let s = s
        .apply(Action::SetGenerating(true), &mut rng)
        .apply(
            Action::CompleteInitialGeneration {
                selection: selection.clone(),
                story: "hello".into(),
            },
            &mut rng,
        );
    assert!(!s.is_loading());
    assert!(!s.is_generating());
    assert_eq!(s.generation_count(), 1);
    assert_eq!(s.selection(), &selection);
    assert_eq!(s.story(), "hello");
}

#[test]
fn ui_flags_are_direct_replacements() {
    let mut rng = Rng64::new(0);
    let s = StudioState::default()
        .apply(Action::SetActiveLayer(Some(Layer::Aura)), &mut rng)
        .apply(Action::SetStatsVisible(true), &mut rng)
        .apply(Action::SetRendering(true), &mut rng)
        .apply(Action::SetStory("x".into()), &mut rng)
        .apply(Action::IncrementGeneration, &mut rng);
    assert_eq!(s.active_layer(), Some(Layer::Aura));
    assert!(s.stats_visible());
    assert!(s.is_rendering());
    assert_eq!(s.story(), "x");
    assert_eq!(s.generation_count(), 1);
    assert_eq!(s.revision(), 5);
}

#[test]
fn store_dispatch_routes_through_apply() {
    let mut store = Store::with_seed(CharacterType::Prey, 77);
    store.dispatch(Action::SetCatalog(TraitCatalog::for_type(CharacterType::Prey)));
    let drawn = store.draw_selection();
    assert_eq!(drawn.len(), 6);
    assert!(store.state().selection().is_empty());
    store.dispatch(Action::SetSelection(drawn.clone()));
    assert_eq!(store.state().selection(), &drawn);
    assert_eq!(store.state().revision(), 2);
}

#[test]
fn set_selection_outside_catalog_is_rejected() {
    let mut store = Store::with_seed(CharacterType::Prey, 1);
    store.dispatch(Action::SetCatalog(TraitCatalog::for_type(CharacterType::Prey)));
    let foreign = Selection::new().with(
        Layer::Body,
        AssetLocator::new(CharacterType::Predator, Layer::Body, "Fox"),
    );
    store.dispatch(Action::SetSelection(foreign));
    assert!(store.state().selection().is_empty());
}
