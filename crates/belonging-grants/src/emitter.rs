//! Grant derivation handlers

use belonging_core::{
    condition_key, AbilityLevel, BelongingQuery, Condition, ConditionValue, Direction, Grant,
    RecordId, RuleCollection, ScopeLabel, Subject, TypeName,
};
use belonging_core::inflect;

use crate::options::{AbilityOptions, MembershipOptions};

/// Derives grants into a rule collection.
///
/// One emitter per derivation pass; it borrows the rule collection for the
/// duration of the pass and holds no other state, so a pass is a pure
/// function of its inputs and the subject's current records.
pub struct GrantEmitter<'a> {
    rules: &'a mut dyn RuleCollection,
}

impl<'a> GrantEmitter<'a> {
    /// Emitter writing into the given rule collection.
    pub fn new(rules: &'a mut dyn RuleCollection) -> Self {
        Self { rules }
    }

    fn emit(&mut self, level: AbilityLevel, resource: &TypeName, condition: Condition) {
        tracing::trace!(resource = %resource, level = %level, "grant");
        self.rules
            .grant(Grant::new(level, resource.clone(), condition));
    }

    /// The three static visibility grants: resource rows marked public are
    /// manageable by `admin`, modifiable by `user`, readable by `guest`.
    ///
    /// Emitted unconditionally, independent of subject or relationship state.
    pub fn public_abilities(&mut self, resource: &TypeName) {
        self.emit(AbilityLevel::Manage, resource, Condition::public("admin"));
        self.emit(AbilityLevel::Modify, resource, Condition::public("user"));
        self.emit(AbilityLevel::Read, resource, Condition::public("guest"));
    }

    /// Public grants plus the owner grant for `subject`.
    ///
    /// An absent subject is the anonymous case: only the public grants apply.
    pub fn abilities(
        &mut self,
        resource: &TypeName,
        subject: Option<&dyn Subject>,
        options: &AbilityOptions,
    ) {
        self.abilities_with(resource, subject, options, |_| {});
    }

    /// [`abilities`](Self::abilities) with a hook for caller-supplied extra
    /// grants, invoked after the owner grant (and only when a subject is
    /// present).
    pub fn abilities_with<F>(
        &mut self,
        resource: &TypeName,
        subject: Option<&dyn Subject>,
        options: &AbilityOptions,
        extra: F,
    ) where
        F: FnOnce(&mut Self),
    {
        if options.public_grants {
            self.public_abilities(resource);
        }
        let Some(subject) = subject else {
            return;
        };

        let id_field = condition_key(Some(&options.column), "id");
        let condition = if options.polymorphic {
            Condition::Typed {
                id_field,
                id_value: subject.id(),
                type_field: condition_key(Some(&options.column), "type"),
                type_value: subject.class_name(),
            }
        } else {
            Condition::Flat {
                field: id_field,
                value: ConditionValue::Id(subject.id()),
            }
        };
        self.emit(AbilityLevel::Manage, resource, condition);
        extra(self);
    }

    /// Membership-derived grants for one relation.
    ///
    /// Two independent sources feed this handler:
    ///
    /// 1. The subject's membership records (scope-filtered per
    ///    `options.scope`) whose belonger is a `relation` container: each
    ///    labeled record emits its mapped level; unlabeled records are
    ///    skipped.
    /// 2. The subject's named collection under the pluralized relation
    ///    (direct ownership, independent of the belonging table): every owned
    ///    object emits `Manage`, with no label check and no scope filter.
    pub fn membership_abilities(
        &mut self,
        relation: &str,
        resource: &TypeName,
        subject: &dyn Subject,
        options: &MembershipOptions,
    ) {
        let container_type = TypeName::from_relation(relation);
        let records =
            BelongingQuery::scoped(Direction::Belongable, options.scope.clone()).run(subject);
        tracing::debug!(
            relation,
            resource = %resource,
            records = records.len(),
            "deriving membership grants"
        );

        for belonging in records {
            if belonging.belonger_type != container_type {
                continue;
            }
            let Some(level) = belonging.ability.level() else {
                continue;
            };
            let condition = Self::container_condition(
                relation,
                options,
                belonging.belonger_id,
                &belonging.belonger_type,
            );
            self.emit(level, resource, condition);
        }

        for object in subject.named_collection(&inflect::pluralize(relation)) {
            let condition =
                Self::container_condition(relation, options, object.id, &object.class_name);
            self.emit(AbilityLevel::Manage, resource, condition);
        }
    }

    /// Condition shape shared by the record and owned-object branches of
    /// membership derivation.
    fn container_condition(
        relation: &str,
        options: &MembershipOptions,
        id: RecordId,
        type_name: &TypeName,
    ) -> Condition {
        if options.acts_as_belongable {
            let field = options
                .column
                .clone()
                .unwrap_or_else(|| inflect::pluralize(relation));
            return Condition::Membership { field, id };
        }

        let column = options.column.as_deref().unwrap_or(relation);
        let id_field = condition_key(Some(column), "id");
        if options.polymorphic {
            Condition::Typed {
                id_field,
                id_value: id,
                type_field: condition_key(Some(column), "type"),
                type_value: type_name.clone(),
            }
        } else {
            Condition::Flat {
                field: id_field,
                value: ConditionValue::Id(id),
            }
        }
    }

    /// Per-record grants where the subject is the belongable and the
    /// belonger is a `resource` row.
    ///
    /// The scope-generic counterpart of membership derivation, used when the
    /// relation is not known in advance: each labeled record scopes the
    /// mapped level to the opposite side's row id.
    pub fn belongable_abilities(
        &mut self,
        resource: &TypeName,
        subject: &dyn Subject,
        scope: Option<ScopeLabel>,
    ) {
        self.opposite_side_abilities(resource, subject, Direction::Belongable, scope);
    }

    /// Per-record grants where the subject is the belonger and the
    /// belongable is a `resource` row.
    pub fn belonger_abilities(
        &mut self,
        resource: &TypeName,
        subject: &dyn Subject,
        scope: Option<ScopeLabel>,
    ) {
        self.opposite_side_abilities(resource, subject, Direction::Belonger, scope);
    }

    fn opposite_side_abilities(
        &mut self,
        resource: &TypeName,
        subject: &dyn Subject,
        side: Direction,
        scope: Option<ScopeLabel>,
    ) {
        let opposite = side.opposite();
        for belonging in BelongingQuery::scoped(side, scope).run(subject) {
            if belonging.side_type(opposite) != resource {
                continue;
            }
            let Some(level) = belonging.ability.level() else {
                continue;
            };
            let id = belonging.side_id(opposite);
            self.emit(level, resource, Condition::flat_id("id", id));
        }
    }

    /// Register an action alias grouping `actions` under the `modify` tier.
    pub fn modify_alias(&mut self, actions: &[&str]) {
        self.rules.alias_actions(
            actions.iter().map(|action| action.to_string()).collect(),
            AbilityLevel::Modify,
        );
    }
}
