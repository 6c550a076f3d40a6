//! Pure merge rules for successful mutations.
//!
//! Every store funnels adapter results through [`apply`], so the merge
//! behavior is testable without an async harness.

use uuid::Uuid;

/// Record with a stable identifier the reducer can merge on.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for api_types::expense::Expense {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for api_types::category::Category {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for api_types::revenue::Revenue {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// A successful mutation result, ready to merge into a local collection.
#[derive(Clone, Debug)]
pub enum Mutation<T> {
    Created(T),
    Updated(T),
    Removed(Uuid),
}

/// Merges a mutation into the collection.
///
/// Created rows are prepended (newest first), updates replace the row
/// with the matching id, removals drop it. An update or removal for an
/// unknown id leaves the collection unchanged.
pub fn apply<T: Keyed>(items: &mut Vec<T>, mutation: Mutation<T>) {
    match mutation {
        Mutation::Created(item) => items.insert(0, item),
        Mutation::Updated(item) => {
            if let Some(slot) = items.iter_mut().find(|existing| existing.key() == item.key()) {
                *slot = item;
            }
        }
        Mutation::Removed(id) => items.retain(|existing| existing.key() != id),
    }
}

#[cfg(test)]
mod tests {
    use api_types::category::Category;
    use uuid::Uuid;

    use super::*;

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            color: "#888888".to_string(),
            user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn created_prepends() {
        let mut items = vec![category("Food")];
        let fresh = category("Transport");
        let fresh_id = fresh.id;

        apply(&mut items, Mutation::Created(fresh));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, fresh_id);
    }

    #[test]
    fn updated_replaces_matching_id() {
        let mut items = vec![category("Food"), category("Rent")];
        let mut renamed = items[1].clone();
        renamed.name = "Housing".to_string();

        apply(&mut items, Mutation::Updated(renamed));

        assert_eq!(items[1].name, "Housing");
        assert_eq!(items[0].name, "Food");
    }

    #[test]
    fn updated_unknown_id_is_a_noop() {
        let mut items = vec![category("Food")];
        let before = items.clone();

        apply(&mut items, Mutation::Updated(category("Ghost")));

        assert_eq!(items, before);
    }

    #[test]
    fn removed_drops_matching_id() {
        let mut items = vec![category("Food"), category("Rent")];
        let target = items[0].id;

        apply(&mut items, Mutation::Removed(target));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Rent");
    }

    #[test]
    fn removed_unknown_id_is_a_noop() {
        let mut items = vec![category("Food")];

        apply(&mut items, Mutation::Removed(Uuid::new_v4()));

        assert_eq!(items.len(), 1);
    }
}
