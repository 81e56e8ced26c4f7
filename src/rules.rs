use crate::{Identity, IdentityCounts};

/// Everything a rule may inspect: the cell's identity plus the neighbor
/// tables cached for this tick. Rules never read live grid state, so a
/// generation is a pure function of the previous one.
#[derive(Clone, Copy)]
pub struct RuleInput<'a> {
    pub identity: Identity,
    /// Orthogonal neighbors (N/S/E/W), toroidally wrapped.
    pub adjacent: &'a IdentityCounts,
    /// Corner neighbors (NE/NW/SE/SW), toroidally wrapped.
    pub diagonal: &'a IdentityCounts,
    /// Elementwise sum of `adjacent` and `diagonal`.
    pub neighbor: &'a IdentityCounts,
}

/// One transition rule: a pure function from cached neighbor data to a
/// candidate next identity, declared for a single applicable identity.
///
/// Invoking a rule on a cell of any other identity is a contract
/// violation; every rule body asserts it.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies_to: Identity,
    pub eval: fn(RuleInput) -> Identity,
}

/// Immutable identity-to-ordered-rule-list mapping.
///
/// Constructed once and handed to a [`Simulator`](crate::Simulator), so
/// independent simulations can run distinct tables in one process. Order
/// within a list is configuration, not priority: the first rule whose
/// result differs from the current identity wins the tick.
pub struct RuleSet {
    table: [Vec<Rule>; Identity::COUNT],
}

impl RuleSet {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut table: [Vec<Rule>; Identity::COUNT] = std::array::from_fn(|_| Vec::new());
        for rule in rules {
            table[rule.applies_to.index()].push(rule);
        }
        Self { table }
    }

    /// The standard extended-life table.
    ///
    /// Every Inactive rule here needs at least three non-Inactive
    /// neighbors to fire, which keeps static-cell pruning sound (see
    /// [`StaticityClassifier`](crate::StaticityClassifier)).
    pub fn standard() -> Self {
        Self::new([
            Rule {
                name: "solitude",
                applies_to: Identity::Live,
                eval: solitude,
            },
            Rule {
                name: "overpopulation",
                applies_to: Identity::Live,
                eval: overpopulation,
            },
            Rule {
                name: "scorch",
                applies_to: Identity::Live,
                eval: scorch,
            },
            Rule {
                name: "drowning",
                applies_to: Identity::Live,
                eval: drowning,
            },
            Rule {
                name: "reproduction",
                applies_to: Identity::Inactive,
                eval: reproduction,
            },
            Rule {
                name: "spreading_fire",
                applies_to: Identity::Inactive,
                eval: spreading_fire,
            },
            Rule {
                name: "burnout",
                applies_to: Identity::Fire,
                eval: burnout,
            },
            Rule {
                name: "firefighter",
                applies_to: Identity::Fire,
                eval: firefighter,
            },
            Rule {
                name: "extinguish",
                applies_to: Identity::Fire,
                eval: extinguish,
            },
            Rule {
                name: "evaporation",
                applies_to: Identity::Water,
                eval: evaporation,
            },
        ])
    }

    pub fn rules_for(&self, identity: Identity) -> &[Rule] {
        &self.table[identity.index()]
    }

    /// Walks the cell's rule list in declared order, stopping at the
    /// first rule that changes the identity. No change means stasis.
    pub fn evaluate(&self, input: RuleInput) -> Identity {
        for rule in self.rules_for(input.identity) {
            let next = (rule.eval)(input);
            if next != input.identity {
                return next;
            }
        }
        input.identity
    }
}

/// Live cell with fewer than two live neighbors dies of under-population.
pub fn solitude(input: RuleInput) -> Identity {
    assert_eq!(input.identity, Identity::Live, "solitude applies to live cells");
    if input.neighbor.count(Identity::Live) < 2 {
        Identity::Inactive
    } else {
        input.identity
    }
}

/// Live cell with more than three live neighbors dies.
pub fn overpopulation(input: RuleInput) -> Identity {
    assert_eq!(
        input.identity,
        Identity::Live,
        "overpopulation applies to live cells"
    );
    if input.neighbor.count(Identity::Live) > 3 {
        Identity::Inactive
    } else {
        input.identity
    }
}

/// Inactive cell with exactly three live neighbors comes to life.
pub fn reproduction(input: RuleInput) -> Identity {
    assert_eq!(
        input.identity,
        Identity::Inactive,
        "reproduction applies to inactive cells"
    );
    if input.neighbor.count(Identity::Live) == 3 {
        Identity::Live
    } else {
        input.identity
    }
}

/// Fire with no orthogonally adjacent fire burns out. Diagonal fire does
/// not sustain it.
pub fn burnout(input: RuleInput) -> Identity {
    assert_eq!(input.identity, Identity::Fire, "burnout applies to fire cells");
    if input.adjacent.count(Identity::Fire) == 0 {
        Identity::Inactive
    } else {
        input.identity
    }
}

/// Inactive cell surrounded by four or more fire cells ignites.
pub fn spreading_fire(input: RuleInput) -> Identity {
    assert_eq!(
        input.identity,
        Identity::Inactive,
        "spreading fire applies to inactive cells"
    );
    if input.neighbor.count(Identity::Fire) >= 4 {
        Identity::Fire
    } else {
        input.identity
    }
}

/// Live cell orthogonally adjacent to fire dies. Diagonal fire does not
/// scorch.
pub fn scorch(input: RuleInput) -> Identity {
    assert_eq!(input.identity, Identity::Live, "scorch applies to live cells");
    if input.adjacent.count(Identity::Fire) >= 1 {
        Identity::Inactive
    } else {
        input.identity
    }
}

/// Fire with two or more live cells on its corners turns to water.
///
/// Counts the diagonal table only; live cells that are also orthogonally
/// adjacent are not excluded. This preserves the behavior the game has
/// always had, its prose description ("but not directly adjacent")
/// notwithstanding.
pub fn firefighter(input: RuleInput) -> Identity {
    assert_eq!(
        input.identity,
        Identity::Fire,
        "firefighter applies to fire cells"
    );
    if input.diagonal.count(Identity::Live) >= 2 {
        Identity::Water
    } else {
        input.identity
    }
}

/// Fire touching any water is put out.
pub fn extinguish(input: RuleInput) -> Identity {
    assert_eq!(
        input.identity,
        Identity::Fire,
        "extinguish applies to fire cells"
    );
    if input.neighbor.count(Identity::Water) >= 1 {
        Identity::Inactive
    } else {
        input.identity
    }
}

/// Live cell with six or more water neighbors drowns.
pub fn drowning(input: RuleInput) -> Identity {
    assert_eq!(input.identity, Identity::Live, "drowning applies to live cells");
    if input.neighbor.count(Identity::Water) >= 6 {
        Identity::Inactive
    } else {
        input.identity
    }
}

/// Water with no orthogonally adjacent water evaporates.
pub fn evaporation(input: RuleInput) -> Identity {
    assert_eq!(
        input.identity,
        Identity::Water,
        "evaporation applies to water cells"
    );
    if input.adjacent.count(Identity::Water) == 0 {
        Identity::Inactive
    } else {
        input.identity
    }
}
