///! Photo selection for the rover gallery
///!
///! Three passes over the upstream order:
///! 1. keep only the first photo for each source URL
///! 2. drop mosaics
///! 3. keep survivors whose position is on the allow-list
use nasa_common::Photo;
use std::collections::HashSet;

/// Number of positions on the allow-list.
pub const ALLOWED_POSITION_COUNT: usize = 40;

/// Hand-picked gallery positions, counted after dedup and mosaic removal.
pub fn is_allowed_position(index: usize) -> bool {
    matches!(index, 0..=28 | 42..=45 | 48 | 49 | 71..=74 | 88)
}

/// Reduce an upstream photo list to the gallery.
///
/// Dedup runs before the mosaic filter, so a URL whose first occurrence is a
/// mosaic is gone even if a later copy is not.
pub fn select_photos<I>(photos: I) -> Vec<Photo>
where
    I: IntoIterator<Item = Photo>,
{
    let mut seen = HashSet::new();

    photos
        .into_iter()
        .filter(|photo| seen.insert(photo.source_url.clone()))
        .filter(|photo| !photo.is_mosaic)
        .enumerate()
        .filter(|(index, _)| is_allowed_position(*index))
        .map(|(_, photo)| photo)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(n: usize) -> Photo {
        Photo::new(format!("https://mars.nasa.gov/msl/{}.jpg", n), "Curiosity")
    }

    fn numbered(n: usize) -> Vec<Photo> {
        (0..n).map(photo).collect()
    }

    fn allowed_below(len: usize) -> usize {
        (0..len).filter(|i| is_allowed_position(*i)).count()
    }

    #[test]
    fn test_allow_list_shape() {
        assert_eq!((0..200).filter(|i| is_allowed_position(*i)).count(), ALLOWED_POSITION_COUNT);
        assert!(is_allowed_position(0));
        assert!(is_allowed_position(28));
        assert!(!is_allowed_position(29));
        assert!(!is_allowed_position(41));
        assert!(is_allowed_position(45));
        assert!(!is_allowed_position(46));
        assert!(!is_allowed_position(47));
        assert!(is_allowed_position(49));
        assert!(!is_allowed_position(50));
        assert!(is_allowed_position(71));
        assert!(is_allowed_position(74));
        assert!(!is_allowed_position(87));
        assert!(is_allowed_position(88));
        assert!(!is_allowed_position(89));
    }

    #[test]
    fn test_empty_input() {
        assert!(select_photos(Vec::new()).is_empty());
    }

    #[test]
    fn test_short_input_keeps_everything_under_29() {
        let input = numbered(10);
        assert_eq!(select_photos(input.clone()), input);
    }

    #[test]
    fn test_positions_follow_allow_list() {
        let input = numbered(100);
        let output = select_photos(input.clone());

        assert_eq!(output.len(), ALLOWED_POSITION_COUNT);
        let expected: Vec<Photo> = input
            .into_iter()
            .enumerate()
            .filter(|(i, _)| is_allowed_position(*i))
            .map(|(_, p)| p)
            .collect();
        assert_eq!(output, expected);
        assert_eq!(output[29], photo(42));
        assert_eq!(output[39], photo(88));
    }

    #[test]
    fn test_first_duplicate_wins_and_mosaics_drop() {
        let input = vec![
            photo(0),
            photo(1).mosaic(),
            Photo::new(photo(0).source_url, "Perseverance"),
            photo(2),
        ];
        let output = select_photos(input);
        assert_eq!(output, vec![photo(0), photo(2)]);
        assert_eq!(output[0].rover_name, "Curiosity");
    }

    #[test]
    fn test_mosaic_first_occurrence_removes_url() {
        let input = vec![photo(0).mosaic(), photo(0), photo(1)];
        assert_eq!(select_photos(input), vec![photo(1)]);
    }

    #[test]
    fn test_ninety_photos_with_duplicates_and_mosaics() {
        // 82 distinct non-mosaic photos with 5 duplicates and 3 mosaics mixed in
        let mut input = Vec::new();
        for i in 0..82 {
            input.push(photo(i));
            match i {
                10 | 20 | 30 | 40 | 50 => input.push(photo(i - 3)),
                15 | 45 | 75 => input.push(photo(1000 + i).mosaic()),
                _ => {}
            }
        }
        assert_eq!(input.len(), 90);

        let output = select_photos(input);
        assert_eq!(output.len(), allowed_below(82));
        assert_eq!(output.len(), 39);
    }

    #[test]
    fn test_output_invariants() {
        let mut input = Vec::new();
        for i in 0..300 {
            let p = photo(i % 120);
            input.push(if i % 7 == 0 { p.mosaic() } else { p });
        }
        let output = select_photos(input);

        let unique: HashSet<_> = output.iter().map(|p| p.source_url.as_str()).collect();
        assert_eq!(unique.len(), output.len());
        assert!(output.iter().all(|p| !p.is_mosaic));
        assert!(output.len() <= ALLOWED_POSITION_COUNT);
    }

    #[test]
    fn test_reapplying_matches_positional_rule() {
        let output = select_photos(numbered(100));
        let expected: Vec<Photo> = output
            .iter()
            .cloned()
            .enumerate()
            .filter(|(i, _)| is_allowed_position(*i))
            .map(|(_, p)| p)
            .collect();
        assert_eq!(select_photos(output), expected);
    }

    #[test]
    fn test_deterministic() {
        let input = numbered(95);
        assert_eq!(select_photos(input.clone()), select_photos(input));
    }
}
