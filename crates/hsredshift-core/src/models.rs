//! The Hearthstone match-analytics warehouse tables.
//!
//! Every table is distributed on `game_id` (or `id` for `game` itself) so a
//! match's rows live on one node, and sorted on `game_date`.

use crate::column::Column;
use crate::table::Table;
use crate::tags::GameTag;
use crate::types::ColumnType::*;
use crate::types::Encoding::*;
use crate::types::VARCHAR_MAX;

/// All tables in declaration order.
pub fn all() -> Vec<Table> {
    vec![
        game(),
        player(),
        block(),
        block_info(),
        choices(),
        options(),
        entity_state(),
    ]
}

/// One row per replayed match. Root of every other table.
#[rustfmt::skip]
pub fn game() -> Table {
    Table::new("game")
        .column(Column::new("id", BigInt).primary_key().encode(Lzo).dist_key())
        .column(Column::new("game_date", Date).not_null().encode(Lzo).sort_key())
        .column(Column::new("match_start", Timestamp).not_null().encode(Lzo))
        .column(Column::new("game_type", SmallInt).not_null().encode(Lzo))
        .column(Column::new("region", SmallInt).not_null().encode(Lzo))
        .column(Column::new("num_turns", SmallInt).not_null().encode(Delta))
        .column(Column::new("game_length_seconds", Integer).not_null().encode(Delta32k))
        .column(Column::new("ladder_season", Integer).not_null().encode(Runlength))
        .column(Column::new("brawl_season", Integer).encode(Lzo))
        .column(Column::new("scenario_id", Integer).encode(Lzo))
}

/// One row per player per game.
#[rustfmt::skip]
pub fn player() -> Table {
    Table::new("player")
        .column(Column::foreign("game_id", "game", "id").not_null().encode(Lzo).dist_key())
        .column(Column::new("game_date", Date).not_null().encode(Lzo).sort_key())
        .column(Column::new("player_id", SmallInt).not_null().encode(Lzo))
        .column(Column::new("entity_id", SmallInt).not_null().encode(Lzo))
        .column(Column::new("deck_id", BigInt).not_null().encode(Lzo))
        .column(Column::new("archetype_id", Integer).encode(Lzo))
        .column(Column::new("final_state", SmallInt).not_null().encode(Lzo))
        .column(Column::new("region", SmallInt).not_null().encode(Lzo))
        .column(Column::new("account_lo", Integer).not_null().encode(Raw))
        .column(Column::new("is_first", Boolean).not_null().encode(Raw))
        .column(Column::new("is_ai", Boolean).not_null().encode(Runlength))
        .column(Column::new("options_visible", Boolean).not_null().encode(Raw))
        .column(Column::new("full_deck_known", Boolean).not_null().encode(Raw))
        .column(Column::new("player_class", SmallInt).not_null().encode(Lzo))
        .column(Column::new("starting_hero_dbf_id", Integer).not_null().encode(Bytedict))
        // 0 means legend; legend_rank is then populated.
        .column(Column::new("rank", SmallInt).not_null().default(-1_i64).encode(Lzo))
        .column(Column::new("legend_rank", Integer).encode(Lzo))
        // {"<dbf_id>": <num_copies>, ...}
        .column(Column::new("deck_list", Varchar(VARCHAR_MAX)).default("{}").encode(Lzo))
        .primary_key_constraint("player_pk", ["game_id", "player_id"])
}

/// Logged game actions. Each block groups the entity-state changes it caused.
#[rustfmt::skip]
pub fn block() -> Table {
    Table::new("block")
        .column(Column::new("id", BigInt).primary_key().encode(Lzo))
        .column(Column::foreign("game_id", "game", "id").not_null().encode(Lzo).dist_key())
        .column(Column::new("game_date", Date).not_null().encode(Lzo).sort_key())
        .column(Column::new("block_type", SmallInt).not_null().encode(Lzo))
        .column(Column::new("entity_id", SmallInt).not_null().encode(Bytedict))
        .column(Column::new("turn", SmallInt).not_null().encode(Lzo))
        .column(Column::new("step", SmallInt).not_null().encode(Lzo))
        .column(Column::new("entity_dbf_id", Integer).encode(Lzo))
        .column(Column::new("entity_player_id", SmallInt).encode(Lzo))
        .column(Column::new("parent_id", BigInt).encode(Lzo))
        .column(Column::new("target_entity_id", SmallInt).encode(Lzo))
        .column(Column::new("target_entity_dbf_id", Integer).encode(Lzo))
        .foreign_key_constraint(["game_id", "entity_player_id"], "player", ["game_id", "player_id"])
}

/// Metadata rows attached to a block.
#[rustfmt::skip]
pub fn block_info() -> Table {
    Table::new("block_info")
        .column(Column::foreign("block_id", "block", "id").not_null().encode(Lzo))
        .column(Column::foreign("game_id", "game", "id").not_null().encode(Lzo).dist_key())
        .column(Column::new("game_date", Date).not_null().encode(Lzo).sort_key())
        .column(Column::new("meta_data_type", SmallInt).not_null().encode(Lzo))
        .column(Column::new("info_entity_id", SmallInt).not_null().encode(Bytedict))
        .column(Column::new("data", Integer).not_null().encode(Delta))
        .column(Column::new("info_entity_dbf_id", Integer).encode(Lzo))
}

/// Player decisions (mulligan, discover, ...) made within a block.
#[rustfmt::skip]
pub fn choices() -> Table {
    Table::new("choices")
        .column(Column::foreign("block_id", "block", "id").not_null().encode(Lzo))
        .column(Column::foreign("game_id", "game", "id").not_null().encode(Lzo).dist_key())
        .column(Column::new("game_date", Date).not_null().encode(Lzo).sort_key())
        .column(Column::new("player_entity_id", SmallInt).not_null().encode(Lzo))
        .column(Column::new("choices_block_id", SmallInt).not_null().encode(Lzo))
        .column(Column::new("entity_id", SmallInt).not_null().encode(Bytedict))
        .column(Column::new("chosen", Boolean).not_null().encode(Raw))
        .column(Column::new("choice_type", SmallInt).not_null().encode(Runlength))
        .column(Column::new("entity_dbf_id", Integer).encode(Lzo))
        .column(Column::new("source_entity_id", SmallInt).encode(Lzo))
}

/// Options presented to a player, flattened to one row per
/// option / sub-option / target combination.
///
/// An options packet looks like:
///
/// ```text
/// <Options id="62">
///     <Option index="0" type="2" />
///     <Option entity="31" index="1" type="3">
///         <SubOption entity="32" index="0" />
///         <SubOption entity="33" index="1" />
///     </Option>
///     <Option entity="101" index="2" type="3">
///         <SubOption entity="102" index="0">
///             <Target entity="82" index="0" />
///             <Target entity="84" index="1" />
///         </SubOption>
///     </Option>
/// </Options>
/// ```
#[rustfmt::skip]
pub fn options() -> Table {
    Table::new("options")
        .column(Column::foreign("game_id", "game", "id").not_null().encode(Lzo).dist_key())
        .column(Column::new("game_date", Date).not_null().encode(Lzo).sort_key())
        .column(Column::new("player_id", SmallInt).not_null().encode(Lzo))
        .column(Column::new("player_final_state", SmallInt).not_null().encode(Lzo))
        .column(Column::new("turn", SmallInt).not_null().encode(Lzo))
        .column(Column::new("step", SmallInt).not_null().encode(Lzo))
        .column(Column::new("options_block_id", SmallInt).not_null().encode(Lzo))
        .column(Column::new("option_index", SmallInt).not_null().encode(Lzo))
        .column(Column::new("option_type", SmallInt).not_null().encode(Lzo))
        .column(Column::new("option_entity_id", SmallInt).not_null().encode(Lzo))
        .column(Column::new("option_entity_dbf_id", Integer).encode(Lzo))
        .column(Column::new("suboption_index", SmallInt).encode(Lzo))
        .column(Column::new("suboption_entity_id", SmallInt).encode(Lzo))
        .column(Column::new("suboption_entity_dbf_id", Integer).encode(Lzo))
        .column(Column::new("target_index", SmallInt).encode(Lzo))
        .column(Column::new("target_entity_id", SmallInt).encode(Lzo))
        .column(Column::new("target_entity_dbf_id", Integer).encode(Lzo))
        .column(Column::new("sent", Boolean).encode(Raw))
        .column(Column::new("sent_position", SmallInt).encode(Lzo))
        .column(Column::new("sent_suboption", SmallInt).encode(Lzo))
        .column(Column::new("sent_target", SmallInt).encode(Lzo))
        .foreign_key_constraint(["game_id", "player_id"], "player", ["game_id", "player_id"])
}

/// Per-entity game-state snapshots. Most columns mirror a single game tag.
#[rustfmt::skip]
pub fn entity_state() -> Table {
    Table::new("entity_state")
        .column(Column::foreign("game_id", "game", "id").not_null().encode(Lzo).dist_key())
        .column(Column::new("game_date", Date).not_null().encode(Lzo).sort_key())
        .column(Column::new("entity_id", SmallInt).not_null().encode(Bytedict).tag(GameTag::EntityId))
        .column(Column::new("turn", SmallInt).not_null().encode(Lzo).tag(GameTag::Turn))
        .column(Column::new("step", SmallInt).not_null().encode(Lzo).tag(GameTag::Step))
        .column(Column::new("entity_in_initial_entities", Boolean).not_null().encode(Raw))
        .column(Column::new("entered_zone_on", SmallInt).encode(Lzo))
        .column(Column::new("dbf_id", Integer).encode(Lzo))
        .column(Column::foreign("before_block_id", "block", "id").encode(Lzo))
        .column(Column::foreign("after_block_id", "block", "id").encode(Lzo))
        .column(Column::new("controller", SmallInt).encode(Lzo).tag(GameTag::Controller))
        .column(Column::new("controller_final_state", SmallInt).not_null().encode(Lzo))
        .column(Column::new("last_affected_by_dbf_id", Integer).encode(Lzo))
        .column(Column::new("attached_dbf_id", Integer).encode(Lzo))
        .column(Column::new("zone", SmallInt).not_null().encode(Lzo).tag(GameTag::Zone))
        .column(Column::new("cost", Integer).encode(Lzo).tag(GameTag::Cost))
        .column(Column::new("atk", Integer).encode(Lzo).tag(GameTag::Atk))
        .column(Column::new("health", Integer).encode(Lzo).tag(GameTag::Health))
        .column(Column::new("armor", Integer).encode(Lzo).tag(GameTag::Armor))
        .column(Column::new("durability", Integer).encode(Lzo).tag(GameTag::Durability))
        .column(Column::new("damage", Integer).encode(Lzo).tag(GameTag::Damage))
        .column(Column::new("taunt", Boolean).encode(Raw).tag(GameTag::Taunt))
        .column(Column::new("stealth", Boolean).encode(Runlength).tag(GameTag::Stealth))
        .column(Column::new("divine_shield", Boolean).encode(Runlength).tag(GameTag::DivineShield))
        .column(Column::new("deathrattle", Boolean).encode(Runlength).tag(GameTag::Deathrattle))
        .column(Column::new("zone_position", SmallInt).encode(Lzo).tag(GameTag::ZonePosition))
        .column(Column::new("spellpower", Integer).encode(Lzo).tag(GameTag::Spellpower))
        .column(Column::new("charge", Boolean).encode(Runlength).tag(GameTag::Charge))
        .column(Column::new("silenced", Boolean).encode(Runlength).tag(GameTag::Silenced))
        .column(Column::new("windfury", SmallInt).encode(Lzo).tag(GameTag::Windfury))
        .column(Column::new("last_affected_by", SmallInt).encode(Lzo).tag(GameTag::LastAffectedBy))
        .column(Column::new("frozen", Boolean).encode(Runlength).tag(GameTag::Frozen))
        .column(Column::new("enraged", Boolean).encode(Runlength).tag(GameTag::Enraged))
        .column(Column::new("overload", Boolean).encode(Runlength).tag(GameTag::Overload))
        .column(Column::new("secret", Boolean).encode(Runlength).tag(GameTag::Secret))
        .column(Column::new("combo", Boolean).encode(Runlength).tag(GameTag::Combo))
        .column(Column::new("fatigue", SmallInt).encode(Lzo).tag(GameTag::Fatigue))
        .column(Column::new("current_player", Boolean).encode(Runlength).tag(GameTag::CurrentPlayer))
        .column(Column::new("first_player", Boolean).encode(Runlength).tag(GameTag::FirstPlayer))
        .column(Column::new("resources_used", SmallInt).encode(Lzo).tag(GameTag::ResourcesUsed))
        .column(Column::new("resources", SmallInt).encode(Lzo).tag(GameTag::Resources))
        .column(Column::new("hero_entity", SmallInt).encode(Lzo).tag(GameTag::HeroEntity))
        .column(Column::new("attached", SmallInt).encode(Lzo).tag(GameTag::Attached))
        .column(Column::new("exhausted", Boolean).encode(Raw).tag(GameTag::Exhausted))
        .column(Column::new("owner", SmallInt).encode(Lzo).tag(GameTag::Owner))
        .column(Column::new("elite", Boolean).encode(Runlength).tag(GameTag::Elite))
        .column(Column::new("next_step", SmallInt).encode(Lzo).tag(GameTag::NextStep))
        .column(Column::new("class", SmallInt).encode(Lzo).tag(GameTag::Class))
        .column(Column::new("card_set", SmallInt).encode(Lzo).tag(GameTag::CardSet))
        .column(Column::new("cardrace", SmallInt).encode(Lzo).tag(GameTag::Cardrace))
        .column(Column::new("faction", SmallInt).encode(Lzo).tag(GameTag::Faction))
        .column(Column::new("cardtype", SmallInt).encode(Lzo).tag(GameTag::Cardtype))
        .column(Column::new("rarity", SmallInt).encode(Lzo).tag(GameTag::Rarity))
        .column(Column::new("state", SmallInt).encode(Lzo).tag(GameTag::State))
        .column(Column::new("cant_attack", Boolean).encode(Runlength).tag(GameTag::CantAttack))
        .column(Column::new("cant_play", Boolean).encode(Runlength).tag(GameTag::CantPlay))
        .column(Column::new("immune", Boolean).encode(Runlength).tag(GameTag::Immune))
        .column(Column::new("just_played", Boolean).encode(Raw).tag(GameTag::JustPlayed))
        .column(Column::new("linked_entity", SmallInt).encode(Lzo).tag(GameTag::LinkedEntity))
        .column(Column::new("combo_active", Boolean).encode(Runlength).tag(GameTag::ComboActive))
        .column(Column::new("card_target", Integer).encode(Lzo).tag(GameTag::CardTarget))
        .column(Column::new("num_cards_played_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumCardsPlayedThisTurn))
        .column(Column::new("cant_be_targeted_by_opponents", Boolean).encode(Runlength).tag(GameTag::CantBeTargetedByOpponents))
        .column(Column::new("num_turns_in_play", SmallInt).encode(Lzo).tag(GameTag::NumTurnsInPlay))
        .column(Column::new("num_turns_left", SmallInt).encode(Lzo).tag(GameTag::NumTurnsLeft))
        .column(Column::new("current_spellpower", Integer).encode(Lzo).tag(GameTag::CurrentSpellpower))
        .column(Column::new("temp_resources", SmallInt).encode(Lzo).tag(GameTag::TempResources))
        .column(Column::new("overload_owed", SmallInt).encode(Lzo).tag(GameTag::OverloadOwed))
        .column(Column::new("num_attacks_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumAttacksThisTurn))
        .column(Column::new("first_card_played_this_turn", SmallInt).encode(Lzo).tag(GameTag::FirstCardPlayedThisTurn))
        .column(Column::new("mulligan_state", SmallInt).encode(Lzo).tag(GameTag::MulliganState))
        .column(Column::new("cant_be_targeted_by_spells", SmallInt).encode(Lzo).tag(GameTag::CantBeTargetedBySpells))
        .column(Column::new("shouldexitcombat", Boolean).encode(Runlength).tag(GameTag::Shouldexitcombat))
        .column(Column::new("creator", SmallInt).encode(Lzo).tag(GameTag::Creator))
        .column(Column::new("parent_card", SmallInt).encode(Lzo).tag(GameTag::ParentCard))
        .column(Column::new("num_minions_played_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumMinionsPlayedThisTurn))
        .column(Column::new("collectible", Boolean).encode(Runlength).tag(GameTag::Collectible))
        .column(Column::new("cant_be_targeted_by_hero_powers", Boolean).encode(Runlength).tag(GameTag::CantBeTargetedByHeroPowers))
        .column(Column::new("health_minimum", SmallInt).encode(Lzo).tag(GameTag::HealthMinimum))
        .column(Column::new("tag_one_turn_effect", Boolean).encode(Runlength).tag(GameTag::TagOneTurnEffect))
        .column(Column::new("hand_revealed", Boolean).encode(Runlength).tag(GameTag::HandRevealed))
        .column(Column::new("adjacent_buff", Boolean).encode(Runlength).tag(GameTag::AdjacentBuff))
        .column(Column::new("spellpower_double", SmallInt).encode(Lzo).tag(GameTag::SpellpowerDouble))
        .column(Column::new("healing_double", SmallInt).encode(Lzo).tag(GameTag::HealingDouble))
        .column(Column::new("num_options_played_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumOptionsPlayedThisTurn))
        .column(Column::new("to_be_destroyed", Boolean).encode(Runlength).tag(GameTag::ToBeDestroyed))
        .column(Column::new("aura", Boolean).encode(Runlength).tag(GameTag::Aura))
        .column(Column::new("poisonous", Boolean).encode(Runlength).tag(GameTag::Poisonous))
        .column(Column::new("hero_power_double", SmallInt).encode(Lzo).tag(GameTag::HeroPowerDouble))
        .column(Column::new("ai_must_play", Boolean).encode(Runlength).tag(GameTag::AiMustPlay))
        .column(Column::new("num_minions_player_killed_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumMinionsPlayerKilledThisTurn))
        .column(Column::new("num_minions_killed_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumMinionsKilledThisTurn))
        .column(Column::new("affected_by_spell_power", Boolean).encode(Runlength).tag(GameTag::AffectedBySpellPower))
        .column(Column::new("extra_deathrattles", SmallInt).encode(Lzo).tag(GameTag::ExtraDeathrattles))
        .column(Column::new("start_with_1_health", Boolean).encode(Runlength).tag(GameTag::StartWith1Health))
        .column(Column::new("immune_while_attacking", Boolean).encode(Runlength).tag(GameTag::ImmuneWhileAttacking))
        .column(Column::new("multiply_hero_damage", Boolean).encode(Runlength).tag(GameTag::MultiplyHeroDamage))
        .column(Column::new("topdeck", Boolean).encode(Runlength).tag(GameTag::Topdeck))
        .column(Column::new("hero_power", Integer).encode(Lzo).tag(GameTag::HeroPower))
        .column(Column::new("deathrattle_return_zone", SmallInt).encode(Lzo).tag(GameTag::DeathrattleReturnZone))
        .column(Column::new("steady_shot_can_target", Boolean).encode(Runlength).tag(GameTag::SteadyShotCanTarget))
        .column(Column::new("displayed_creator", SmallInt).encode(Lzo).tag(GameTag::DisplayedCreator))
        .column(Column::new("powered_up", Boolean).encode(Runlength).tag(GameTag::PoweredUp))
        .column(Column::new("spare_part", Boolean).encode(Runlength).tag(GameTag::SparePart))
        .column(Column::new("forgetful", Boolean).encode(Runlength).tag(GameTag::Forgetful))
        .column(Column::new("overload_locked", SmallInt).encode(Lzo).tag(GameTag::OverloadLocked))
        .column(Column::new("num_times_hero_power_used_this_game", SmallInt).encode(Lzo).tag(GameTag::NumTimesHeroPowerUsedThisGame))
        .column(Column::new("current_heropower_damage_bonus", SmallInt).encode(Lzo).tag(GameTag::CurrentHeropowerDamageBonus))
        .column(Column::new("heropower_damage", SmallInt).encode(Lzo).tag(GameTag::HeropowerDamage))
        .column(Column::new("last_card_played", SmallInt).encode(Lzo).tag(GameTag::LastCardPlayed))
        .column(Column::new("num_friendly_minions_that_died_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumFriendlyMinionsThatDiedThisTurn))
        .column(Column::new("num_cards_drawn_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumCardsDrawnThisTurn))
        .column(Column::new("inspire", Boolean).encode(Runlength).tag(GameTag::Inspire))
        .column(Column::new("receives_double_spelldamage_bonus", Boolean).encode(Runlength).tag(GameTag::ReceivesDoubleSpelldamageBonus))
        .column(Column::new("heropower_additional_activations", SmallInt).encode(Lzo).tag(GameTag::HeropowerAdditionalActivations))
        .column(Column::new("heropower_activations_this_turn", SmallInt).encode(Lzo).tag(GameTag::HeropowerActivationsThisTurn))
        .column(Column::new("revealed", Boolean).encode(Runlength).tag(GameTag::Revealed))
        .column(Column::new("num_friendly_minions_that_died_this_game", SmallInt).encode(Lzo).tag(GameTag::NumFriendlyMinionsThatDiedThisGame))
        .column(Column::new("cannot_attack_heroes", Boolean).encode(Runlength).tag(GameTag::CannotAttackHeroes))
        .column(Column::new("lock_and_load", Boolean).encode(Runlength).tag(GameTag::LockAndLoad))
        .column(Column::new("discover", Boolean).encode(Runlength).tag(GameTag::Discover))
        .column(Column::new("shadowform", Boolean).encode(Runlength).tag(GameTag::Shadowform))
        .column(Column::new("num_friendly_minions_that_attacked_this_turn", SmallInt).encode(Lzo).tag(GameTag::NumFriendlyMinionsThatAttackedThisTurn))
        .column(Column::new("num_resources_spent_this_game", SmallInt).encode(Lzo).tag(GameTag::NumResourcesSpentThisGame))
        .column(Column::new("choose_both", Boolean).encode(Runlength).tag(GameTag::ChooseBoth))
        .column(Column::new("heavily_armored", Boolean).encode(Runlength).tag(GameTag::HeavilyArmored))
        .column(Column::new("dont_show_immune", Boolean).encode(Runlength).tag(GameTag::DontShowImmune))
        .column(Column::new("ritual", Boolean).encode(Runlength).tag(GameTag::Ritual))
        .column(Column::new("overload_this_game", SmallInt).encode(Lzo).tag(GameTag::OverloadThisGame))
        .column(Column::new("spells_cost_health", Boolean).encode(Runlength).tag(GameTag::SpellsCostHealth))
        .column(Column::new("transformed_from_card", Integer).encode(Lzo).tag(GameTag::TransformedFromCard))
        .column(Column::new("cthun", Boolean).encode(Runlength).tag(GameTag::Cthun))
        .column(Column::new("shifting", Boolean).encode(Runlength).tag(GameTag::Shifting))
        .column(Column::new("jade_golem", SmallInt).encode(Lzo).tag(GameTag::JadeGolem))
        .column(Column::new("embrace_the_shadow", Boolean).encode(Runlength).tag(GameTag::EmbraceTheShadow))
        .column(Column::new("choose_one", Boolean).encode(Runlength).tag(GameTag::ChooseOne))
        .column(Column::new("extra_attacks_this_turn", SmallInt).encode(Lzo).tag(GameTag::ExtraAttacksThisTurn))
        .column(Column::new("seen_cthun", Boolean).encode(Runlength).tag(GameTag::SeenCthun))
        .column(Column::new("untouchable", Boolean).encode(Runlength).tag(GameTag::Untouchable))
        .column(Column::new("red_mana_crystals", SmallInt).encode(Lzo).tag(GameTag::RedManaCrystals))
        .column(Column::new("autoattack", Boolean).encode(Runlength).tag(GameTag::Autoattack))
        .column(Column::new("arms_dealing", SmallInt).encode(Lzo).tag(GameTag::ArmsDealing))
        .column(Column::new("tag_last_known_cost_in_hand", SmallInt).encode(Lzo).tag(GameTag::TagLastKnownCostInHand))
        .column(Column::new("kazakus_potion_power_1", Integer).encode(Lzo).tag(GameTag::KazakusPotionPower1))
        .column(Column::new("kazakus_potion_power_2", Integer).encode(Lzo).tag(GameTag::KazakusPotionPower2))
        .column(Column::new("modify_definition_attack", Integer).encode(Lzo).tag(GameTag::ModifyDefinitionAttack))
        .column(Column::new("modify_definition_health", Integer).encode(Lzo).tag(GameTag::ModifyDefinitionHealth))
        .column(Column::new("modify_definition_cost", Integer).encode(Lzo).tag(GameTag::ModifyDefinitionCost))
        .column(Column::new("multiple_classes", SmallInt).encode(Lzo).tag(GameTag::MultipleClasses))
        .column(Column::new("all_targets_random", Boolean).encode(Runlength).tag(GameTag::AllTargetsRandom))
        .column(Column::new("multi_class_group", SmallInt).encode(Lzo).tag(GameTag::MultiClassGroup))
        .column(Column::new("card_costs_health", Boolean).encode(Runlength).tag(GameTag::CardCostsHealth))
        .column(Column::new("grimy_goons", Boolean).encode(Runlength).tag(GameTag::GrimyGoons))
        .column(Column::new("jade_lotus", Boolean).encode(Runlength).tag(GameTag::JadeLotus))
        .column(Column::new("kabal", Boolean).encode(Runlength).tag(GameTag::Kabal))
        .column(Column::new("additional_play_reqs_1", Integer).encode(Lzo).tag(GameTag::AdditionalPlayReqs1))
        .column(Column::new("additional_play_reqs_2", Integer).encode(Lzo).tag(GameTag::AdditionalPlayReqs2))
        .column(Column::new("tag_script_data_num_1", Integer).encode(Lzo).tag(GameTag::TagScriptDataNum1))
        .column(Column::new("tag_script_data_num_2", Integer).encode(Lzo).tag(GameTag::TagScriptDataNum2))
        .column(Column::new("tag_script_data_ent_1", Integer).encode(Lzo).tag(GameTag::TagScriptDataEnt1))
        .column(Column::new("tag_script_data_ent_2", Integer).encode(Lzo).tag(GameTag::TagScriptDataEnt2))
        // Remaining tags as JSON.
        .column(Column::new("tags", Varchar(VARCHAR_MAX)).encode(Lzo))
}
