#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::constants::*;
    use crate::enums::*;
    use crate::policy::ZonePolicyTable;
    use crate::types::*;
    use crate::unit::*;
    use crate::world::ZonePolicy;

    fn some_unit() -> Unit {
        Unit {
            handle: UnitHandle(1),
            kind: EntityKind::Player,
            faction: Faction::Alliance,
            arena_team: None,
            pvp_flagged: true,
            zone: ZoneId(0),
            area: AreaId(0),
            flags: UnitFlags::empty(),
            health: 100,
            position: Vec3::ZERO,
            auras: Vec::new(),
            attacker: None,
        }
    }

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_entity_kind_serde() {
        let variants = vec![
            EntityKind::Player,
            EntityKind::Creature,
            EntityKind::Pet,
            EntityKind::GameObject,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EntityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_battleground_kind_serde() {
        let variants = vec![
            BattlegroundKind::AlteracValley,
            BattlegroundKind::WarsongGulch,
            BattlegroundKind::ArathiBasin,
            BattlegroundKind::EyeOfTheStorm,
            BattlegroundKind::StrandOfTheAncients,
            BattlegroundKind::IsleOfConquest,
            BattlegroundKind::Random,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BattlegroundKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify the zone-policy table deserializes from host config JSON and
    /// answers both zone-level and area-level prohibitions.
    #[test]
    fn test_zone_policy_table_from_json() {
        let table: ZonePolicyTable =
            serde_json::from_str(r#"{"zones": [876], "areas": [1519, 1637]}"#).unwrap();
        assert!(table.pvp_prohibited(ZoneId(876), AreaId(0)));
        assert!(table.pvp_prohibited(ZoneId(12), AreaId(1637)));
        assert!(!table.pvp_prohibited(ZoneId(12), AreaId(9)));
    }

    #[test]
    fn test_zone_policy_table_default_prohibits_nothing() {
        let table = ZonePolicyTable::default();
        assert!(!table.pvp_prohibited(ZoneId(876), AreaId(1519)));
    }

    /// Random battleground resolves through to its assigned kind; an
    /// unassigned random queue stays Random.
    #[test]
    fn test_battleground_random_resolution() {
        let assigned = Battleground {
            kind: BattlegroundKind::Random,
            resolved: Some(BattlegroundKind::IsleOfConquest),
        };
        assert_eq!(assigned.resolved_kind(), BattlegroundKind::IsleOfConquest);

        let unassigned = Battleground {
            kind: BattlegroundKind::Random,
            resolved: None,
        };
        assert_eq!(unassigned.resolved_kind(), BattlegroundKind::Random);

        let concrete = Battleground {
            kind: BattlegroundKind::WarsongGulch,
            resolved: None,
        };
        assert_eq!(concrete.resolved_kind(), BattlegroundKind::WarsongGulch);
    }

    #[test]
    fn test_unit_aura_lookup() {
        let mut unit = some_unit();
        assert!(!unit.has_aura(WARSONG_FLAG));
        unit.auras.push(WARSONG_FLAG);
        assert!(unit.has_aura(WARSONG_FLAG));
        assert!(!unit.has_aura(SILVERWING_FLAG));
    }

    #[test]
    fn test_unit_distances() {
        let a = some_unit();
        let mut b = some_unit();
        b.position = Vec3::new(3.0, 4.0, 12.0);
        assert!((a.distance_to(&b) - 13.0).abs() < 1e-5);
        assert!((a.horizontal_distance_to(&b) - 5.0).abs() < 1e-5);
        assert!((a.height_delta_to(&b) - 12.0).abs() < 1e-5);
    }

    /// Cannon mode requires a seat that fires without a selected target;
    /// an ordinary mount does not count.
    #[test]
    fn test_bot_cannon_mode() {
        let mut bot = Bot {
            unit: some_unit(),
            vehicle: None,
            battleground: None,
            victim: None,
            threat_list: Vec::new(),
            party: Vec::new(),
        };
        assert!(!bot.in_cannon());

        bot.vehicle = Some(VehicleSeat {
            fires_without_target: false,
        });
        assert!(!bot.in_cannon());

        bot.vehicle = Some(VehicleSeat {
            fires_without_target: true,
        });
        assert!(bot.in_cannon());
    }

    #[test]
    fn test_bot_victim_check() {
        let mut bot = Bot {
            unit: some_unit(),
            vehicle: None,
            battleground: None,
            victim: Some(UnitHandle(7)),
            threat_list: Vec::new(),
            party: Vec::new(),
        };
        assert!(bot.is_victim(UnitHandle(7)));
        assert!(!bot.is_victim(UnitHandle(8)));
        bot.victim = None;
        assert!(!bot.is_victim(UnitHandle(7)));
    }
}
