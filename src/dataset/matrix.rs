use std::collections::{BTreeSet, HashMap};

use ndarray::{Array2, ArrayView1};

use crate::domain::{JoinedRating, UserId};

/// User × title ratings table. Absent ratings are `NaN`.
#[derive(Debug, Clone)]
pub struct RatingsMatrix {
    users: Vec<UserId>,
    titles: Vec<String>,
    title_index: HashMap<String, usize>,
    values: Array2<f64>,
}

impl RatingsMatrix {
    /// Rows sorted by user id, columns sorted by title. Several ratings by one
    /// user for movies sharing a title are averaged into one cell.
    pub fn pivot(ratings: &[JoinedRating]) -> Self {
        let users: Vec<UserId> = ratings
            .iter()
            .map(|r| r.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let titles: Vec<String> = ratings
            .iter()
            .map(|r| r.title.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let user_index: HashMap<UserId, usize> =
            users.iter().enumerate().map(|(idx, &id)| (id, idx)).collect();
        let title_index: HashMap<String, usize> = titles
            .iter()
            .enumerate()
            .map(|(idx, title)| (title.clone(), idx))
            .collect();

        let shape = (users.len(), titles.len());
        let values = accumulate_means(ratings, &user_index, &title_index, shape);

        Self {
            users,
            titles,
            title_index,
            values,
        }
    }

    pub fn column(&self, title: &str) -> Option<ArrayView1<'_, f64>> {
        self.title_index.get(title).map(|&idx| self.values.column(idx))
    }

    pub fn column_at(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.values.column(idx)
    }

    pub fn get(&self, user_id: UserId, title: &str) -> Option<f64> {
        let row = self.users.binary_search(&user_id).ok()?;
        let col = *self.title_index.get(title)?;
        let value = self.values[[row, col]];
        (!value.is_nan()).then_some(value)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    pub fn n_users(&self) -> usize {
        self.users.len()
    }

    pub fn n_titles(&self) -> usize {
        self.titles.len()
    }
}

fn accumulate_means(
    ratings: &[JoinedRating],
    user_index: &HashMap<UserId, usize>,
    title_index: &HashMap<String, usize>,
    shape: (usize, usize),
) -> Array2<f64> {
    let mut sums = Array2::<f64>::zeros(shape);
    let mut counts = Array2::<u32>::zeros(shape);

    for rating in ratings {
        let i = user_index[&rating.user_id];
        let j = title_index[&rating.title];
        sums[[i, j]] += rating.rating;
        counts[[i, j]] += 1;
    }

    Array2::from_shape_fn(shape, |(i, j)| match counts[[i, j]] {
        0 => f64::NAN,
        n => sums[[i, j]] / n as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user_id: UserId, title: &str, value: f64) -> JoinedRating {
        JoinedRating {
            user_id,
            movie_id: 0,
            title: title.to_string(),
            genres: "Drama".to_string(),
            rating: value,
            timestamp: 0,
        }
    }

    #[test]
    fn test_pivot_shape_and_order() {
        let ratings = vec![
            rating(3, "Heat (1995)", 4.0),
            rating(1, "Casino (1995)", 3.0),
            rating(1, "Heat (1995)", 5.0),
        ];

        let matrix = RatingsMatrix::pivot(&ratings);

        assert_eq!(matrix.users(), &[1, 3]);
        assert_eq!(matrix.titles(), &["Casino (1995)".to_string(), "Heat (1995)".to_string()]);
        assert_eq!(matrix.get(1, "Heat (1995)"), Some(5.0));
        assert_eq!(matrix.get(3, "Casino (1995)"), None);
        assert!(matrix.column("Casino (1995)").unwrap()[1].is_nan());
    }

    #[test]
    fn test_pivot_averages_duplicate_titles() {
        // Two movie ids share the title "Emma (1996)" in MovieLens
        let ratings = vec![rating(1, "Emma (1996)", 3.0), rating(1, "Emma (1996)", 4.0)];

        let matrix = RatingsMatrix::pivot(&ratings);

        assert_eq!(matrix.n_titles(), 1);
        assert_eq!(matrix.get(1, "Emma (1996)"), Some(3.5));
    }

    #[test]
    fn test_unknown_title_has_no_column() {
        let matrix = RatingsMatrix::pivot(&[rating(1, "Heat (1995)", 4.0)]);
        assert!(matrix.column("Ronin (1998)").is_none());
    }
}
