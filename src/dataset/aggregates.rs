use std::collections::BTreeMap;

use crate::domain::{round2, JoinedRating, TitleStats};

/// Rating count and rounded mean per title, in title order
pub fn title_stats<'a, I>(ratings: I) -> Vec<TitleStats>
where
    I: IntoIterator<Item = &'a JoinedRating>,
{
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rating in ratings {
        let entry = totals.entry(rating.title.as_str()).or_insert((0.0, 0));
        entry.0 += rating.rating;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(title, (sum, count))| TitleStats {
            title: title.to_string(),
            rating_count: count,
            avg_rating: round2(sum / count as f64),
        })
        .collect()
}

pub fn mean_rating<'a, I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a JoinedRating>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.rating, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(title: &str, value: f64) -> JoinedRating {
        JoinedRating {
            user_id: 1,
            movie_id: 1,
            title: title.to_string(),
            genres: String::new(),
            rating: value,
            timestamp: 0,
        }
    }

    #[test]
    fn test_title_stats_counts_and_rounds() {
        let ratings = vec![
            rating("B", 4.0),
            rating("A", 3.0),
            rating("B", 3.5),
            rating("B", 3.5),
        ];

        let stats = title_stats(&ratings);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].title, "A");
        assert_eq!(stats[1].rating_count, 3);
        assert_eq!(stats[1].avg_rating, 3.67);
    }

    #[test]
    fn test_mean_rating_of_nothing() {
        assert_eq!(mean_rating(&Vec::<JoinedRating>::new()), None);
        assert_eq!(mean_rating(&vec![rating("A", 2.0), rating("A", 4.0)]), Some(3.0));
    }
}
