//! Skill registry for definition lookup.
//!
//! The `SkillRegistry` stores all skill definitions for a game and
//! provides fast lookup by `SkillId`. `SkillRegistry::builtin()` builds
//! the full Larien catalog; the flavor text is static configuration, the
//! behavior-relevant fields (policies, gates, summon outputs) are what the
//! engine reads.

use rustc_hash::FxHashMap;

use super::definition::{
    ActivationCondition, OptionId, SkillDefinition, SkillId, SkillKind, SummonKind, SummonOutput,
    TokenKind, UsagePolicy,
};

/// Well-known skill ids of the builtin catalog.
pub mod skills {
    use super::SkillId;

    pub const DWARF_HUNT: SkillId = SkillId::new(1);
    pub const INSECT_QUEEN: SkillId = SkillId::new(2);
    pub const GENIE_LAMP: SkillId = SkillId::new(3);
    pub const LAST_BREATH: SkillId = SkillId::new(4);
    pub const HERO_STRIKE: SkillId = SkillId::new(5);
    pub const WITCH_COVEN: SkillId = SkillId::new(6);
    pub const JOTUNHEIMR_GATE: SkillId = SkillId::new(7);
    pub const TREASURE_SCALE: SkillId = SkillId::new(8);
    pub const DELORIAN: SkillId = SkillId::new(9);
    pub const DRAGON_TAMER: SkillId = SkillId::new(10);
    pub const HELL_GATES: SkillId = SkillId::new(11);
    pub const MY_DOLLARS: SkillId = SkillId::new(12);
    pub const DESTINY_THEFT: SkillId = SkillId::new(13);
    pub const JACKPOT: SkillId = SkillId::new(14);
}

/// Jackpot effect numbers with engine-visible behavior.
pub mod jackpot {
    use super::OptionId;

    /// Effect 8, "Reescritura del Azar": grants one extra effect and
    /// downgrades punishment severity one step.
    pub const REWRITE_OF_FATE: OptionId = OptionId::new(8);

    /// Effect 9, "100% de Chances": grants one extra effect and a
    /// guaranteed luck passive.
    pub const FULL_CHANCE: OptionId = OptionId::new(9);
}

/// Registry of skill definitions.
#[derive(Clone, Debug, Default)]
pub struct SkillRegistry {
    skills: FxHashMap<SkillId, SkillDefinition>,
}

impl SkillRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a skill definition.
    ///
    /// Panics if a skill with the same ID already exists.
    pub fn register(&mut self, skill: SkillDefinition) {
        if self.skills.contains_key(&skill.id) {
            panic!("Skill with ID {:?} already registered", skill.id);
        }
        self.skills.insert(skill.id, skill);
    }

    /// Get a skill definition by ID.
    #[must_use]
    pub fn get(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.skills.get(&id)
    }

    /// Check if a skill ID is registered.
    #[must_use]
    pub fn contains(&self, id: SkillId) -> bool {
        self.skills.contains_key(&id)
    }

    /// Get the number of registered skills.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Iterate over all skill definitions.
    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.values()
    }

    /// All skill ids, sorted (deterministic for drafting).
    #[must_use]
    pub fn ids(&self) -> Vec<SkillId> {
        let mut ids: Vec<_> = self.skills.keys().copied().collect();
        ids.sort_by_key(|id| id.raw());
        ids
    }

    /// Find skills matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &SkillDefinition>
    where
        F: Fn(&SkillDefinition) -> bool,
    {
        self.skills.values().filter(move |s| predicate(s))
    }

    /// The full builtin Larien skill catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(
            SkillDefinition::new(skills::DWARF_HUNT, "Caza de los 7 Enanos", SkillKind::Standard)
                .with_usage(UsagePolicy::Cooldown { turns: 3 })
                .with_activation(ActivationCondition::LifeAtMost50)
                .owner_turn_only(),
        );

        registry.register(
            SkillDefinition::new(skills::INSECT_QUEEN, "Reina Insecto", SkillKind::Standard)
                .with_usage(UsagePolicy::Once)
                .owner_turn_only()
                .summon(SummonOutput::TokenFromInput(TokenKind::Insect)),
        );

        registry.register(
            SkillDefinition::new(skills::GENIE_LAMP, "Lámpara del Genio", SkillKind::Standard)
                .with_usage(UsagePolicy::Limited { max: 3 })
                .with_owner_turn_options(&[1, 2])
                .with_option(1, "Robo Sorpresivo", "Roba 3 cartas; vida por unidad robada.")
                .with_option(2, "Daño Único", "Concentra el daño de tus unidades en una.")
                .with_option(3, "Inmortalidad", "Descarta tus tesoros para anular daño."),
        );

        registry.register(
            SkillDefinition::new(skills::LAST_BREATH, "Contrataque Desesperado", SkillKind::Reactive)
                .with_usage(UsagePolicy::Cooldown { turns: 5 }),
        );

        registry.register(
            SkillDefinition::new(skills::HERO_STRIKE, "Golpe del Héroe", SkillKind::Standard)
                .with_usage(UsagePolicy::Once)
                .owner_turn_only()
                .summon(SummonOutput::Summon(SummonKind::Hero)),
        );

        registry.register(
            SkillDefinition::new(
                skills::WITCH_COVEN,
                "Cacería del Aquelarre Absoluto",
                SkillKind::WitchCoven,
            )
            .with_usage(UsagePolicy::Once)
            .owner_turn_only()
            .domain(),
        );

        registry.register(
            SkillDefinition::new(skills::JOTUNHEIMR_GATE, "Puerta a Jötunheimr", SkillKind::Standard)
                .with_usage(UsagePolicy::Once)
                .owner_turn_only()
                .summon(SummonOutput::Summon(SummonKind::Giant)),
        );

        registry.register(
            SkillDefinition::new(skills::TREASURE_SCALE, "Escala de Tesoros", SkillKind::Standard)
                .with_usage(UsagePolicy::Cooldown { turns: 2 })
                .owner_turn_only()
                .with_option(1, "1 Tesoro", "Invoca unidades de coste 1.")
                .with_option(2, "2 Tesoros", "Invoca unidades de coste 1-2.")
                .with_option(3, "3 Tesoros", "Invoca unidades de coste 1-3.")
                .with_option(4, "4 Tesoros", "Invoca unidades de coste 1-4.")
                .with_option(5, "5 Tesoros", "Invoca unidades de coste 1-5.")
                .with_option(6, "6 Tesoros", "Invoca unidades de coste 1-6.")
                .with_option(7, "7 Tesoros (Máx)", "Invoca unidades de coste 1-7."),
        );

        registry.register(
            SkillDefinition::new(skills::DELORIAN, "Delorian", SkillKind::Standard)
                .with_usage(UsagePolicy::Once),
        );

        registry.register(
            SkillDefinition::new(skills::DRAGON_TAMER, "Domador de Dragones", SkillKind::Standard)
                .with_usage(UsagePolicy::Once)
                .owner_turn_only()
                .summon(SummonOutput::Summon(SummonKind::Dragon)),
        );

        registry.register(
            SkillDefinition::new(skills::HELL_GATES, "Puertas del Infierno", SkillKind::Standard)
                .with_usage(UsagePolicy::Once)
                .owner_turn_only()
                .with_activation(ActivationCondition::LifeAtMost50)
                .summon(SummonOutput::Token {
                    kind: TokenKind::Demon,
                    count: 1,
                }),
        );

        registry.register(
            SkillDefinition::new(skills::MY_DOLLARS, "Mis Dólares", SkillKind::Standard)
                .with_usage(UsagePolicy::Cooldown { turns: 3 })
                .owner_turn_only(),
        );

        registry.register(
            SkillDefinition::new(skills::DESTINY_THEFT, "Robo del Destino", SkillKind::Standard)
                .with_usage(UsagePolicy::Once)
                .owner_turn_only(),
        );

        registry.register(
            SkillDefinition::new(
                skills::JACKPOT,
                "Jackpot – Dominio del Azar Absoluto",
                SkillKind::Jackpot,
            )
            .with_usage(UsagePolicy::Once)
            .owner_turn_only()
            .domain()
            .with_activation(ActivationCondition::LifeAtMost50)
            .with_option(1, "1. Tesoros Infinitos", "Los Tesoros no se agotan al usarlos.")
            .with_option(2, "2. Costo Cero", "Todas las cartas que juegues cuestan 0 Tesoros.")
            .with_option(3, "3. Acción", "Cada vez que juegues una Acción, roba 1 carta.")
            .with_option(
                4,
                "4. Anulación Automática",
                "La primera carta o efecto rival de cada turno se anula.",
            )
            .with_option(
                5,
                "5. Resurrección Masiva",
                "Invoca los Monstruos de tu descarte hasta el final del turno.",
            )
            .with_option(
                6,
                "6. Asalto Total",
                "Tus Monstruos atacan al ser invocados, una vez adicional, con Arrollar.",
            )
            .with_option(
                7,
                "7. Daño Descontrolado",
                "El daño de combate que inflijas se duplica y tiene Arrollar.",
            )
            .with_option(
                8,
                "8. Reescritura del Azar",
                "+1 efecto adicional al azar. Reduce la severidad del castigo un paso.",
            )
            .with_option(
                9,
                "9. 100% de Chances",
                "+1 efecto adicional al azar. 100% de probabilidad de anular el castigo.",
            ),
        );

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = SkillRegistry::new();
        registry.register(SkillDefinition::new(
            SkillId::new(99),
            "Test Skill",
            SkillKind::Standard,
        ));

        assert!(registry.get(SkillId::new(99)).is_some());
        assert!(registry.get(SkillId::new(100)).is_none());
        assert!(registry.contains(SkillId::new(99)));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = SkillRegistry::new();
        registry.register(SkillDefinition::new(SkillId::new(1), "A", SkillKind::Standard));
        registry.register(SkillDefinition::new(SkillId::new(1), "B", SkillKind::Standard));
    }

    #[test]
    fn test_builtin_catalog() {
        let registry = SkillRegistry::builtin();

        assert_eq!(registry.len(), 14);

        let jackpot = registry.get(skills::JACKPOT).unwrap();
        assert_eq!(jackpot.kind, SkillKind::Jackpot);
        assert!(jackpot.is_domain);
        assert!(jackpot.owner_turn_only);
        assert_eq!(jackpot.activation, ActivationCondition::LifeAtMost50);
        assert_eq!(jackpot.options.len(), 9);
        assert!(jackpot.option(jackpot::REWRITE_OF_FATE).is_some());
        assert!(jackpot.option(jackpot::FULL_CHANCE).is_some());

        let coven = registry.get(skills::WITCH_COVEN).unwrap();
        assert_eq!(coven.kind, SkillKind::WitchCoven);
        assert!(coven.is_domain);

        let breath = registry.get(skills::LAST_BREATH).unwrap();
        assert_eq!(breath.kind, SkillKind::Reactive);
        assert!(!breath.owner_turn_only);
        assert_eq!(breath.usage, UsagePolicy::Cooldown { turns: 5 });
    }

    #[test]
    fn test_builtin_summon_table() {
        let registry = SkillRegistry::builtin();

        assert_eq!(
            registry.get(skills::DRAGON_TAMER).unwrap().summon_output,
            Some(SummonOutput::Summon(SummonKind::Dragon))
        );
        assert_eq!(
            registry.get(skills::INSECT_QUEEN).unwrap().summon_output,
            Some(SummonOutput::TokenFromInput(TokenKind::Insect))
        );
        assert_eq!(
            registry.get(skills::HELL_GATES).unwrap().summon_output,
            Some(SummonOutput::Token {
                kind: TokenKind::Demon,
                count: 1
            })
        );
        assert!(registry.get(skills::DELORIAN).unwrap().summon_output.is_none());
    }

    #[test]
    fn test_ids_sorted() {
        let registry = SkillRegistry::builtin();
        let ids = registry.ids();
        assert_eq!(ids.len(), 14);
        assert!(ids.windows(2).all(|w| w[0].raw() < w[1].raw()));
    }

    #[test]
    fn test_find_domain_skills() {
        let registry = SkillRegistry::builtin();
        let domains: Vec<_> = registry.find(|s| s.is_domain).collect();
        assert_eq!(domains.len(), 2);
    }
}
