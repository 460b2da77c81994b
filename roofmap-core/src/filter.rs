use roofmap_entities::{category::Category, record::LocationRecord};

/// All records of `category` in their original order.
///
/// Without a category nothing is shown at all.
pub fn filter_records<'a, I>(records: I, category: Option<Category>) -> Vec<&'a LocationRecord>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    let Some(category) = category else {
        return vec![];
    };
    records
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn nothing_without_category() {
        assert!(filter_records(&roofs(), None).is_empty());
    }

    #[test]
    fn exactly_the_records_of_a_category_in_store_order() {
        let records = roofs();
        for c in Category::all() {
            let filtered = filter_records(&records, Some(c));
            let expected: Vec<_> = records.iter().filter(|r| r.category == c).collect();
            assert_eq!(filtered, expected);
            assert!(filtered.iter().all(|r| r.category == c));
        }
        let ids: Vec<_> = filter_records(&records, Some(Category::Koda))
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["koda-1", "koda-2", "koda-3"]);
    }

    #[test]
    fn empty_category() {
        let records: Vec<_> = roofs()
            .into_iter()
            .filter(|r| r.category != Category::Titania)
            .collect();
        assert!(filter_records(&records, Some(Category::Titania)).is_empty());
    }
}
