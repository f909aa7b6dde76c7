//! End-to-end derivation behavior over in-memory subjects

use assert_matches::assert_matches;
use serde_json::json;

use belonging_core::test_utils::StaticSubject;
use belonging_core::{
    AbilityLevel, Belonging, Condition, Direction, Grant, OwnedObject, RuleCollection, TypeName,
};
use belonging_grants::{AbilityOptions, GrantEmitter, MembershipOptions};

fn document() -> TypeName {
    TypeName::new("Document")
}

fn derive_membership(subject: &StaticSubject, options: &MembershipOptions) -> Vec<Grant> {
    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).membership_abilities("team", &document(), subject, options);
    rules
}

#[test]
fn public_abilities_always_emit_exactly_three_grants() {
    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).public_abilities(&document());

    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0].level, AbilityLevel::Manage);
    assert_eq!(rules[1].level, AbilityLevel::Modify);
    assert_eq!(rules[2].level, AbilityLevel::Read);
    assert_eq!(
        rules[0].condition_map(),
        json!({ "ability": "admin", "visibility": "public" })
            .as_object()
            .cloned()
            .unwrap()
    );
    assert_eq!(
        rules[2].condition_map(),
        json!({ "ability": "guest", "visibility": "public" })
            .as_object()
            .cloned()
            .unwrap()
    );
}

#[test]
fn anonymous_abilities_emit_only_the_public_grants() {
    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).abilities(&document(), None, &AbilityOptions::default());

    assert_eq!(rules.len(), 3);
    assert!(rules
        .iter()
        .all(|grant| matches!(grant.condition, Condition::Public { .. })));
}

#[test]
fn polymorphic_owner_grant_pairs_id_and_type_keys() {
    let subject = StaticSubject::new(42, "User");
    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).abilities(
        &document(),
        Some(&subject),
        &AbilityOptions {
            column: "owner".to_string(),
            polymorphic: true,
            public_grants: true,
        },
    );

    assert_eq!(rules.len(), 4);
    let owner = &rules[3];
    assert_eq!(owner.level, AbilityLevel::Manage);
    assert_eq!(
        owner.condition_map(),
        json!({ "owner_id": 42, "owner_type": "User" })
            .as_object()
            .cloned()
            .unwrap()
    );
}

#[test]
fn disabling_public_grants_leaves_only_the_owner_grant() {
    let subject = StaticSubject::new(42, "User");
    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).abilities(
        &document(),
        Some(&subject),
        &AbilityOptions {
            public_grants: false,
            ..AbilityOptions::default()
        },
    );

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].condition, Condition::flat_id("user_id", 42));
}

#[test]
fn extra_grants_hook_runs_after_the_owner_grant() {
    let subject = StaticSubject::new(1, "User");
    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).abilities_with(
        &document(),
        Some(&subject),
        &AbilityOptions {
            public_grants: false,
            ..AbilityOptions::default()
        },
        |emitter| {
            emitter.belonger_abilities(&document(), &subject, None);
            emitter.public_abilities(&document());
        },
    );

    // Owner grant first, then whatever the hook emitted.
    assert_eq!(rules.len(), 4);
    assert_eq!(rules[0].condition, Condition::flat_id("user_id", 1));
    assert_matches!(rules[1].condition, Condition::Public { .. });
}

#[test]
fn extra_grants_hook_is_skipped_for_anonymous_subjects() {
    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).abilities_with(
        &document(),
        None,
        &AbilityOptions::default(),
        |emitter| emitter.public_abilities(&document()),
    );

    assert_eq!(rules.len(), 3);
}

#[test]
fn membership_grants_cover_records_and_owned_objects() {
    let subject = StaticSubject::new(1, "User")
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Team", 7, "User", 1)
                .with_scope("membership")
                .with_ability("admin"),
        )
        .with_collection("teams", vec![OwnedObject::new(9, "Team")]);
    let rules = derive_membership(&subject, &MembershipOptions::default());

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].level, AbilityLevel::Manage);
    assert_eq!(rules[0].condition, Condition::flat_id("team_id", 7));
    assert_eq!(rules[1].level, AbilityLevel::Manage);
    assert_eq!(rules[1].condition, Condition::flat_id("team_id", 9));
}

#[test]
fn membership_levels_follow_the_record_label() {
    let subject = StaticSubject::new(1, "User")
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Team", 7, "User", 1)
                .with_scope("membership")
                .with_ability("guest"),
        )
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Team", 8, "User", 1)
                .with_scope("membership")
                .with_ability("moderator"),
        );
    let rules = derive_membership(&subject, &MembershipOptions::default());

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].level, AbilityLevel::Read);
    assert_eq!(
        rules[1].level,
        AbilityLevel::Custom("moderator".to_string())
    );
}

#[test]
fn membership_scope_filter_spares_the_owned_collection() {
    // Records on another scope are dropped; direct ownership is deliberately
    // never scope filtered.
    let subject = StaticSubject::new(1, "User")
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Team", 7, "User", 1)
                .with_scope("watchers")
                .with_ability("admin"),
        )
        .with_collection("teams", vec![OwnedObject::new(9, "Team")]);
    let rules = derive_membership(&subject, &MembershipOptions::default());

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].condition, Condition::flat_id("team_id", 9));
}

#[test]
fn membership_polymorphic_conditions_carry_the_container_type() {
    let subject = StaticSubject::new(1, "User").with_belonging(
        Direction::Belongable,
        Belonging::new("Team", 7, "User", 1)
            .with_scope("membership")
            .with_ability("user"),
    );
    let rules = derive_membership(
        &subject,
        &MembershipOptions {
            polymorphic: true,
            ..MembershipOptions::default()
        },
    );

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].level, AbilityLevel::Modify);
    assert_eq!(
        rules[0].condition_map(),
        json!({ "team_id": 7, "team_type": "Team" })
            .as_object()
            .cloned()
            .unwrap()
    );
}

#[test]
fn acts_as_belongable_scopes_by_collection_membership() {
    let subject = StaticSubject::new(1, "User")
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Team", 7, "User", 1)
                .with_scope("membership")
                .with_ability("admin"),
        )
        .with_collection("teams", vec![OwnedObject::new(9, "Team")]);
    let rules = derive_membership(
        &subject,
        &MembershipOptions {
            acts_as_belongable: true,
            ..MembershipOptions::default()
        },
    );

    assert_eq!(rules.len(), 2);
    assert_matches!(&rules[0].condition, Condition::Membership { field, .. } if field == "teams");
    assert_eq!(
        rules[0].condition_map(),
        json!({ "teams": { "id": 7 } }).as_object().cloned().unwrap()
    );
    assert_eq!(
        rules[1].condition_map(),
        json!({ "teams": { "id": 9 } }).as_object().cloned().unwrap()
    );
}

#[test]
fn membership_column_override_renames_the_keys() {
    let subject = StaticSubject::new(1, "User").with_belonging(
        Direction::Belongable,
        Belonging::new("Team", 7, "User", 1)
            .with_scope("membership")
            .with_ability("admin"),
    );
    let rules = derive_membership(
        &subject,
        &MembershipOptions {
            column: Some("group".to_string()),
            ..MembershipOptions::default()
        },
    );

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].condition, Condition::flat_id("group_id", 7));
}

#[test]
fn belongable_abilities_scope_to_the_belonger_row() {
    let subject = StaticSubject::new(1, "User")
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Document", 3, "User", 1).with_ability("user"),
        )
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Folder", 4, "User", 1).with_ability("admin"),
        )
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Document", 5, "User", 1),
        );
    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).belongable_abilities(&document(), &subject, None);

    // The Folder record mismatches the resource class, the unlabeled record
    // is skipped.
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].level, AbilityLevel::Modify);
    assert_eq!(rules[0].condition, Condition::flat_id("id", 3));
}

#[test]
fn belonger_abilities_scope_to_the_belongable_row() {
    let subject = StaticSubject::new(1, "User")
        .with_belonging(
            Direction::Belonger,
            Belonging::new("User", 1, "Document", 6).with_ability("guest"),
        )
        .with_belonging(
            Direction::Belonger,
            Belonging::new("User", 1, "Document", 8)
                .with_scope("starred")
                .with_ability("admin"),
        );

    let mut rules: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut rules).belonger_abilities(&document(), &subject, None);
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].condition, Condition::flat_id("id", 6));
    assert_eq!(rules[1].condition, Condition::flat_id("id", 8));

    let mut scoped: Vec<Grant> = Vec::new();
    GrantEmitter::new(&mut scoped).belonger_abilities(
        &document(),
        &subject,
        Some("starred".into()),
    );
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].condition, Condition::flat_id("id", 8));
}

#[test]
fn derivation_is_idempotent_on_unchanged_inputs() {
    let subject = StaticSubject::new(1, "User")
        .with_belonging(
            Direction::Belongable,
            Belonging::new("Team", 7, "User", 1)
                .with_scope("membership")
                .with_ability("admin"),
        )
        .with_collection("teams", vec![OwnedObject::new(9, "Team")]);

    let first = derive_membership(&subject, &MembershipOptions::default());
    let second = derive_membership(&subject, &MembershipOptions::default());

    assert_eq!(first, second);
}

/// Rule collection that also records alias declarations.
#[derive(Default)]
struct Recorded {
    grants: Vec<Grant>,
    aliases: Vec<(Vec<String>, AbilityLevel)>,
}

impl RuleCollection for Recorded {
    fn grant(&mut self, grant: Grant) {
        self.grants.push(grant);
    }

    fn alias_actions(&mut self, actions: Vec<String>, to: AbilityLevel) {
        self.aliases.push((actions, to));
    }
}

#[test]
fn modify_alias_forwards_one_declaration() {
    let mut rules = Recorded::default();
    GrantEmitter::new(&mut rules).modify_alias(&["update", "rename"]);

    assert!(rules.grants.is_empty());
    assert_eq!(
        rules.aliases,
        vec![(
            vec!["update".to_string(), "rename".to_string()],
            AbilityLevel::Modify
        )]
    );
}
