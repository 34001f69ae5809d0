use serde_json::Value;

use crate::{ActorKey, Details, GroupProperties, GroupType};

/// Arranges per-actor details into the nested snapshot layout.
///
/// Each configured dimension other than [`GroupType::None`] adds one nesting
/// level, outermost first. Actors landing on the same path are merged, later
/// merges overwrite keys of earlier ones.
pub(crate) struct DetailsContainer {
    levels: Vec<GroupType>,
    details: Details,
}

impl DetailsContainer {
    pub fn new(groups: &GroupProperties) -> Self {
        Self {
            levels: groups
                .dimensions()
                .into_iter()
                .filter(|level| !level.is_none())
                .collect(),
            details: Details::new(),
        }
    }

    pub fn merge(&mut self, key: &ActorKey, details: Details) {
        let mut target = &mut self.details;
        for level in &self.levels {
            let segment = match level {
                GroupType::Interface => key.type_name(),
                GroupType::Identity => key.identity_or_null(),
                GroupType::None => continue,
            };
            let slot = target
                .entry(segment)
                .or_insert_with(|| Value::Object(Details::new()));
            let Value::Object(next) = slot else {
                unreachable!("every actor is nested to the same depth")
            };
            target = next;
        }
        target.extend(details);
    }

    pub fn into_details(self) -> Details {
        self.details
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn details(value: Value) -> Details {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn container(primary: GroupType, secondary: GroupType) -> DetailsContainer {
        DetailsContainer::new(
            &GroupProperties::default()
                .with_primary(primary)
                .with_secondary(secondary),
        )
    }

    #[test]
    fn groups_by_interface_then_identity() {
        let mut c = container(GroupType::Interface, GroupType::Identity);
        c.merge(&ActorKey::new("X", Some("0")), details(json!({"a": 1})));
        c.merge(&ActorKey::new("Y", Some("0")), details(json!({"b": 2})));
        c.merge(&ActorKey::new("X", Some("1")), details(json!({"c": 3})));

        assert_eq!(
            Value::Object(c.into_details()),
            json!({"X": {"0": {"a": 1}, "1": {"c": 3}}, "Y": {"0": {"b": 2}}})
        );
    }

    #[test]
    fn none_adds_no_level() {
        let mut c = container(GroupType::None, GroupType::Interface);
        c.merge(&ActorKey::new("X", Some("0")), details(json!({"a": 1})));
        assert_eq!(Value::Object(c.into_details()), json!({"X": {"a": 1}}));
    }

    #[test]
    fn no_grouping_merges_into_one_namespace() {
        let mut c = container(GroupType::None, GroupType::None);
        c.merge(&ActorKey::new("X", Some("0")), details(json!({"a": 1, "b": 1})));
        c.merge(&ActorKey::new("Y", Some("1")), details(json!({"b": 2})));
        assert_eq!(Value::Object(c.into_details()), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn missing_identity_groups_under_null() {
        let mut c = container(GroupType::Identity, GroupType::None);
        c.merge(&ActorKey::new("Singleton", None), details(json!({"stat": -10})));
        assert_eq!(Value::Object(c.into_details()), json!({"null": {"stat": -10}}));
    }
}
