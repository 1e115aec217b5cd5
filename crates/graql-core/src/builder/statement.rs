use crate::label::{Label, TypeRef};
use crate::pattern::Pattern;
use crate::statement::{
    AttributeStatement, HasAttribute, HasValue, InstanceStatement, Isa, RelationStatement,
    RolePlayer, ThingConstraint, ThingStatement, TypeProperty, TypeStatement,
};
use crate::value::ValueType;
use crate::variable::Variable;

impl ThingStatement {
    pub fn isa(mut self, type_: impl Into<TypeRef>) -> Self {
        self.constraint = Some(ThingConstraint::Isa(Isa::new(type_)));
        self
    }

    pub fn isa_x(mut self, type_: impl Into<TypeRef>) -> Self {
        self.constraint = Some(ThingConstraint::Isa(Isa::explicit(type_)));
        self
    }

    pub fn has(mut self, label: impl Into<Label>, value: impl Into<HasValue>) -> Self {
        self.attributes.push(HasAttribute::new(label, value));
        self
    }
}

impl RelationStatement {
    pub fn rel(mut self, player: impl Into<Variable>) -> Self {
        self.players.push(RolePlayer::new(player));
        self
    }

    pub fn rel_role(mut self, role: impl Into<TypeRef>, player: impl Into<Variable>) -> Self {
        self.players.push(RolePlayer::with_role(role, player));
        self
    }

    pub fn isa(mut self, type_: impl Into<TypeRef>) -> Self {
        self.isa = Some(Isa::new(type_));
        self
    }

    pub fn isa_x(mut self, type_: impl Into<TypeRef>) -> Self {
        self.isa = Some(Isa::explicit(type_));
        self
    }

    pub fn has(mut self, label: impl Into<Label>, value: impl Into<HasValue>) -> Self {
        self.attributes.push(HasAttribute::new(label, value));
        self
    }
}

impl AttributeStatement {
    pub fn isa(mut self, type_: impl Into<TypeRef>) -> Self {
        self.isa = Some(Isa::new(type_));
        self
    }

    pub fn isa_x(mut self, type_: impl Into<TypeRef>) -> Self {
        self.isa = Some(Isa::explicit(type_));
        self
    }

    pub fn has(mut self, label: impl Into<Label>, value: impl Into<HasValue>) -> Self {
        self.attributes.push(HasAttribute::new(label, value));
        self
    }
}

impl TypeStatement {
    fn with(mut self, property: TypeProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn sub(self, supertype: impl Into<TypeRef>) -> Self {
        self.with(TypeProperty::Sub {
            explicit: false,
            supertype: supertype.into(),
        })
    }

    pub fn sub_x(self, supertype: impl Into<TypeRef>) -> Self {
        self.with(TypeProperty::Sub {
            explicit: true,
            supertype: supertype.into(),
        })
    }

    pub fn abstract_(self) -> Self {
        self.with(TypeProperty::Abstract)
    }

    pub fn key(self, attribute_type: impl Into<TypeRef>) -> Self {
        self.with(TypeProperty::Key(attribute_type.into()))
    }

    pub fn has(self, attribute_type: impl Into<TypeRef>) -> Self {
        self.with(TypeProperty::Has(attribute_type.into()))
    }

    pub fn plays(self, role: impl Into<TypeRef>) -> Self {
        self.with(TypeProperty::Plays(role.into()))
    }

    pub fn relates(self, role: impl Into<TypeRef>) -> Self {
        self.with(TypeProperty::Relates {
            role: role.into(),
            overridden: None,
        })
    }

    pub fn relates_as(self, role: impl Into<TypeRef>, overridden: impl Into<TypeRef>) -> Self {
        self.with(TypeProperty::Relates {
            role: role.into(),
            overridden: Some(overridden.into()),
        })
    }

    pub fn value(self, value_type: ValueType) -> Self {
        self.with(TypeProperty::Value(value_type))
    }

    pub fn regex(self, regex: impl Into<String>) -> Self {
        self.with(TypeProperty::Regex(regex.into()))
    }

    pub fn when<P: Into<Pattern>>(self, patterns: impl IntoIterator<Item = P>) -> Self {
        self.with(TypeProperty::When(
            patterns.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn then<S: Into<InstanceStatement>>(self, statements: impl IntoIterator<Item = S>) -> Self {
        self.with(TypeProperty::Then(
            statements.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn type_label(self, label: impl Into<Label>) -> Self {
        self.with(TypeProperty::Type(label.into()))
    }
}
