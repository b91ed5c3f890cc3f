use super::*;

fn fav(generation: u64) -> Favorite {
    Favorite {
        png: Arc::from(vec![generation as u8]),
        generation,
    }
}

#[test]
fn sixth_favorite_evicts_the_oldest() {
    let mut favs = Favorites::default();
    for g in 1..=FAVORITES_CAPACITY as u64 {
        favs.push(fav(g));
    }
    assert_eq!(favs.len(), 5);
    favs.push(fav(6));
    assert_eq!(favs.len(), 5);
    assert_eq!(favs.latest().map(|f| f.generation), Some(6));
    let gens: Vec<u64> = favs.iter().map(|f| f.generation).collect();
    assert_eq!(gens, vec![6, 5, 4, 3, 2]);
}

#[test]
fn never_exceeds_capacity() {
    let mut favs = Favorites::default();
    assert!(favs.is_empty());
    for g in 0..40 {
        favs.push(fav(g));
        assert!(favs.len() <= FAVORITES_CAPACITY);
    }
}
