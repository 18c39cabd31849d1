use crate::api::Song;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks the next song at random, never repeating `current` back to back
/// unless it is the only song available.
pub fn pick_next<'a, R>(songs: &'a [Song], current: Option<&Song>, rng: &mut R) -> Option<&'a Song>
where
    R: Rng + ?Sized,
{
    if songs.len() <= 1 {
        return songs.first();
    }

    let candidates: Vec<&Song> = songs
        .iter()
        .filter(|song| Some(*song) != current)
        .collect();

    // Every entry equals the current song: repeating is the only option.
    if candidates.is_empty() {
        return songs.choose(rng);
    }

    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn song(name: &str) -> Song {
        Song {
            filename: format!("{name}.mp4"),
            title: name.to_string(),
            url: format!("https://example.com/watch?v={name}"),
        }
    }

    #[test]
    fn test_never_repeats_with_multiple_songs() {
        let songs = vec![song("a"), song("b"), song("c")];
        let mut rng = StdRng::seed_from_u64(7);
        let mut current: Option<Song> = None;

        for _ in 0..500 {
            let next = pick_next(&songs, current.as_ref(), &mut rng)
                .cloned()
                .expect("non-empty set");
            assert_ne!(Some(&next), current.as_ref());
            current = Some(next);
        }
    }

    #[test]
    fn test_two_songs_alternate() {
        let songs = vec![song("a"), song("b")];
        let mut rng = StdRng::seed_from_u64(42);
        let first = pick_next(&songs, Some(&songs[0]), &mut rng).cloned();
        assert_eq!(first, Some(songs[1].clone()));
        let second = pick_next(&songs, first.as_ref(), &mut rng).cloned();
        assert_eq!(second, Some(songs[0].clone()));
    }

    #[test]
    fn test_single_song_repeats() {
        let songs = vec![song("only")];
        let mut rng = StdRng::seed_from_u64(1);
        let next = pick_next(&songs, Some(&songs[0]), &mut rng);
        assert_eq!(next, Some(&songs[0]));
    }

    #[test]
    fn test_empty_set_has_no_next() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_next(&[], None, &mut rng), None);
    }

    #[test]
    fn test_identical_entries_still_terminate() {
        let songs = vec![song("dup"), song("dup")];
        let mut rng = StdRng::seed_from_u64(3);
        let next = pick_next(&songs, Some(&songs[0]), &mut rng);
        assert_eq!(next, Some(&songs[0]));
    }

    #[test]
    fn test_every_other_song_is_reachable() {
        let songs = vec![song("a"), song("b"), song("c"), song("d")];
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Some(next) = pick_next(&songs, Some(&songs[0]), &mut rng) {
                seen.insert(next.title.clone());
            }
        }
        assert!(!seen.contains("a"));
        assert_eq!(seen.len(), 3);
    }
}
