//! Game-state attribute identifiers from the Hearthstone game protocol.
//!
//! Columns of `entity_state` that mirror a game tag carry the tag as
//! documentation. The numeric ids are fixed by the game client; this crate
//! only reads them.

use std::fmt;

use serde::{Serialize, Serializer};

macro_rules! game_tags {
    ($($variant:ident = $value:literal => $name:literal,)+) => {
        /// A symbolic game tag with its protocol id.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u32)]
        pub enum GameTag {
            $($variant = $value,)+
        }

        impl GameTag {
            pub const ALL: &'static [GameTag] = &[$(GameTag::$variant,)+];

            /// Protocol name, e.g. `ENTITY_ID`.
            pub fn name(self) -> &'static str {
                match self {
                    $(GameTag::$variant => $name,)+
                }
            }

            pub fn from_value(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(GameTag::$variant),)+
                    _ => None,
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(GameTag::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

game_tags! {
    TagScriptDataNum1 = 2 => "TAG_SCRIPT_DATA_NUM_1",
    TagScriptDataNum2 = 3 => "TAG_SCRIPT_DATA_NUM_2",
    TagScriptDataEnt1 = 4 => "TAG_SCRIPT_DATA_ENT_1",
    TagScriptDataEnt2 = 5 => "TAG_SCRIPT_DATA_ENT_2",
    LastAffectedBy = 18 => "LAST_AFFECTED_BY",
    Step = 19 => "STEP",
    Turn = 20 => "TURN",
    Fatigue = 22 => "FATIGUE",
    CurrentPlayer = 23 => "CURRENT_PLAYER",
    FirstPlayer = 24 => "FIRST_PLAYER",
    ResourcesUsed = 25 => "RESOURCES_USED",
    Resources = 26 => "RESOURCES",
    HeroEntity = 27 => "HERO_ENTITY",
    Attached = 40 => "ATTACHED",
    Exhausted = 43 => "EXHAUSTED",
    Damage = 44 => "DAMAGE",
    Health = 45 => "HEALTH",
    Atk = 47 => "ATK",
    Cost = 48 => "COST",
    Zone = 49 => "ZONE",
    Controller = 50 => "CONTROLLER",
    Owner = 51 => "OWNER",
    EntityId = 53 => "ENTITY_ID",
    Elite = 114 => "ELITE",
    CardSet = 183 => "CARD_SET",
    Durability = 187 => "DURABILITY",
    Silenced = 188 => "SILENCED",
    Windfury = 189 => "WINDFURY",
    Taunt = 190 => "TAUNT",
    Stealth = 191 => "STEALTH",
    Spellpower = 192 => "SPELLPOWER",
    DivineShield = 194 => "DIVINE_SHIELD",
    Charge = 197 => "CHARGE",
    NextStep = 198 => "NEXT_STEP",
    Class = 199 => "CLASS",
    Cardrace = 200 => "CARDRACE",
    Faction = 201 => "FACTION",
    Cardtype = 202 => "CARDTYPE",
    Rarity = 203 => "RARITY",
    State = 204 => "STATE",
    Enraged = 212 => "ENRAGED",
    Overload = 215 => "OVERLOAD",
    Deathrattle = 217 => "DEATHRATTLE",
    Secret = 219 => "SECRET",
    Combo = 220 => "COMBO",
    CantAttack = 227 => "CANT_ATTACK",
    CantPlay = 231 => "CANT_PLAY",
    Immune = 240 => "IMMUNE",
    Frozen = 260 => "FROZEN",
    JustPlayed = 261 => "JUST_PLAYED",
    LinkedEntity = 262 => "LINKED_ENTITY",
    ZonePosition = 263 => "ZONE_POSITION",
    ComboActive = 266 => "COMBO_ACTIVE",
    CardTarget = 267 => "CARD_TARGET",
    NumCardsPlayedThisTurn = 269 => "NUM_CARDS_PLAYED_THIS_TURN",
    CantBeTargetedByOpponents = 270 => "CANT_BE_TARGETED_BY_OPPONENTS",
    NumTurnsInPlay = 271 => "NUM_TURNS_IN_PLAY",
    NumTurnsLeft = 272 => "NUM_TURNS_LEFT",
    CurrentSpellpower = 291 => "CURRENT_SPELLPOWER",
    Armor = 292 => "ARMOR",
    TempResources = 295 => "TEMP_RESOURCES",
    OverloadOwed = 296 => "OVERLOAD_OWED",
    NumAttacksThisTurn = 297 => "NUM_ATTACKS_THIS_TURN",
    FirstCardPlayedThisTurn = 304 => "FIRST_CARD_PLAYED_THIS_TURN",
    MulliganState = 305 => "MULLIGAN_STATE",
    CantBeTargetedBySpells = 311 => "CANT_BE_TARGETED_BY_SPELLS",
    Shouldexitcombat = 312 => "SHOULDEXITCOMBAT",
    Creator = 313 => "CREATOR",
    ParentCard = 316 => "PARENT_CARD",
    NumMinionsPlayedThisTurn = 317 => "NUM_MINIONS_PLAYED_THIS_TURN",
    Collectible = 321 => "COLLECTIBLE",
    CantBeTargetedByHeroPowers = 332 => "CANT_BE_TARGETED_BY_HERO_POWERS",
    HealthMinimum = 337 => "HEALTH_MINIMUM",
    TagOneTurnEffect = 338 => "TAG_ONE_TURN_EFFECT",
    HandRevealed = 348 => "HAND_REVEALED",
    AdjacentBuff = 350 => "ADJACENT_BUFF",
    SpellpowerDouble = 356 => "SPELLPOWER_DOUBLE",
    HealingDouble = 357 => "HEALING_DOUBLE",
    NumOptionsPlayedThisTurn = 358 => "NUM_OPTIONS_PLAYED_THIS_TURN",
    ToBeDestroyed = 360 => "TO_BE_DESTROYED",
    Aura = 362 => "AURA",
    Poisonous = 363 => "POISONOUS",
    HeroPowerDouble = 366 => "HERO_POWER_DOUBLE",
    AiMustPlay = 367 => "AI_MUST_PLAY",
    NumMinionsPlayerKilledThisTurn = 368 => "NUM_MINIONS_PLAYER_KILLED_THIS_TURN",
    NumMinionsKilledThisTurn = 369 => "NUM_MINIONS_KILLED_THIS_TURN",
    AffectedBySpellPower = 370 => "AFFECTED_BY_SPELL_POWER",
    ExtraDeathrattles = 371 => "EXTRA_DEATHRATTLES",
    StartWith1Health = 372 => "START_WITH_1_HEALTH",
    ImmuneWhileAttacking = 373 => "IMMUNE_WHILE_ATTACKING",
    MultiplyHeroDamage = 374 => "MULTIPLY_HERO_DAMAGE",
    Topdeck = 377 => "TOPDECK",
    HeroPower = 380 => "HERO_POWER",
    DeathrattleReturnZone = 382 => "DEATHRATTLE_RETURN_ZONE",
    SteadyShotCanTarget = 383 => "STEADY_SHOT_CAN_TARGET",
    DisplayedCreator = 385 => "DISPLAYED_CREATOR",
    PoweredUp = 386 => "POWERED_UP",
    SparePart = 388 => "SPARE_PART",
    Forgetful = 389 => "FORGETFUL",
    OverloadLocked = 393 => "OVERLOAD_LOCKED",
    NumTimesHeroPowerUsedThisGame = 394 => "NUM_TIMES_HERO_POWER_USED_THIS_GAME",
    CurrentHeropowerDamageBonus = 395 => "CURRENT_HEROPOWER_DAMAGE_BONUS",
    HeropowerDamage = 396 => "HEROPOWER_DAMAGE",
    LastCardPlayed = 397 => "LAST_CARD_PLAYED",
    NumFriendlyMinionsThatDiedThisTurn = 398 => "NUM_FRIENDLY_MINIONS_THAT_DIED_THIS_TURN",
    NumCardsDrawnThisTurn = 399 => "NUM_CARDS_DRAWN_THIS_TURN",
    Inspire = 403 => "INSPIRE",
    ReceivesDoubleSpelldamageBonus = 404 => "RECEIVES_DOUBLE_SPELLDAMAGE_BONUS",
    HeropowerAdditionalActivations = 405 => "HEROPOWER_ADDITIONAL_ACTIVATIONS",
    HeropowerActivationsThisTurn = 406 => "HEROPOWER_ACTIVATIONS_THIS_TURN",
    Revealed = 410 => "REVEALED",
    NumFriendlyMinionsThatDiedThisGame = 412 => "NUM_FRIENDLY_MINIONS_THAT_DIED_THIS_GAME",
    CannotAttackHeroes = 413 => "CANNOT_ATTACK_HEROES",
    LockAndLoad = 414 => "LOCK_AND_LOAD",
    Discover = 415 => "DISCOVER",
    Shadowform = 416 => "SHADOWFORM",
    NumFriendlyMinionsThatAttackedThisTurn = 417 => "NUM_FRIENDLY_MINIONS_THAT_ATTACKED_THIS_TURN",
    NumResourcesSpentThisGame = 418 => "NUM_RESOURCES_SPENT_THIS_GAME",
    ChooseBoth = 419 => "CHOOSE_BOTH",
    HeavilyArmored = 421 => "HEAVILY_ARMORED",
    DontShowImmune = 422 => "DONT_SHOW_IMMUNE",
    Ritual = 424 => "RITUAL",
    OverloadThisGame = 427 => "OVERLOAD_THIS_GAME",
    SpellsCostHealth = 431 => "SPELLS_COST_HEALTH",
    TransformedFromCard = 435 => "TRANSFORMED_FROM_CARD",
    Cthun = 436 => "CTHUN",
    Shifting = 438 => "SHIFTING",
    JadeGolem = 441 => "JADE_GOLEM",
    EmbraceTheShadow = 442 => "EMBRACE_THE_SHADOW",
    ChooseOne = 443 => "CHOOSE_ONE",
    ExtraAttacksThisTurn = 444 => "EXTRA_ATTACKS_THIS_TURN",
    SeenCthun = 445 => "SEEN_CTHUN",
    Untouchable = 448 => "UNTOUCHABLE",
    RedManaCrystals = 449 => "RED_MANA_CRYSTALS",
    Autoattack = 456 => "AUTOATTACK",
    ArmsDealing = 457 => "ARMS_DEALING",
    TagLastKnownCostInHand = 466 => "TAG_LAST_KNOWN_COST_IN_HAND",
    KazakusPotionPower1 = 471 => "KAZAKUS_POTION_POWER_1",
    KazakusPotionPower2 = 472 => "KAZAKUS_POTION_POWER_2",
    ModifyDefinitionAttack = 473 => "MODIFY_DEFINITION_ATTACK",
    ModifyDefinitionHealth = 474 => "MODIFY_DEFINITION_HEALTH",
    ModifyDefinitionCost = 475 => "MODIFY_DEFINITION_COST",
    MultipleClasses = 476 => "MULTIPLE_CLASSES",
    AllTargetsRandom = 477 => "ALL_TARGETS_RANDOM",
    MultiClassGroup = 480 => "MULTI_CLASS_GROUP",
    CardCostsHealth = 481 => "CARD_COSTS_HEALTH",
    GrimyGoons = 482 => "GRIMY_GOONS",
    JadeLotus = 483 => "JADE_LOTUS",
    Kabal = 484 => "KABAL",
    AdditionalPlayReqs1 = 515 => "ADDITIONAL_PLAY_REQS_1",
    AdditionalPlayReqs2 = 516 => "ADDITIONAL_PLAY_REQS_2",
}

impl GameTag {
    pub fn value(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for GameTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.value())
    }
}

/// Serialized as `{"name": "ZONE", "value": 49}` so exported schema
/// documents stay readable without the enumeration at hand.
impl Serialize for GameTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("GameTag", 2)?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("value", &self.value())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(GameTag::EntityId.value(), 53);
        assert_eq!(GameTag::Zone.value(), 49);
        assert_eq!(GameTag::Controller.value(), 50);
        assert_eq!(GameTag::Armor.value(), 292);
    }

    #[test]
    fn test_lookup_both_ways() {
        for &tag in GameTag::ALL {
            assert_eq!(GameTag::from_value(tag.value()), Some(tag));
            assert_eq!(GameTag::from_name(tag.name()), Some(tag));
        }
        assert_eq!(GameTag::from_value(1), None);
        assert_eq!(GameTag::from_name("zone"), None);
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = GameTag::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), GameTag::ALL.len());
    }

    #[test]
    fn test_serialize_includes_id() {
        let json = serde_json::to_string(&GameTag::Taunt).unwrap();
        assert_eq!(json, r#"{"name":"TAUNT","value":190}"#);
    }
}
