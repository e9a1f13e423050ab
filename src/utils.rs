use std::collections::HashSet;
use std::hash::Hash;

pub type ClassName = String;

/// Returns the first element that appears more than once
pub fn first_duplicate<'a, T, I>(items: I) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    T: Eq + Hash + 'a,
{
    let mut seen: HashSet<&T> = HashSet::new();
    items.into_iter().find(|item| !seen.insert(*item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_duplicate_works() {
        // Given
        let items = vec!["a", "b", "c", "b", "a"];

        // Then
        assert_eq!(Some(&"b"), first_duplicate(&items));
        assert_eq!(None, first_duplicate(&items[..3]));
    }
}
