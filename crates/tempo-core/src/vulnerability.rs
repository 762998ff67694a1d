//! Area-specific vulnerability and risk assessment.

use crate::models::{
    AreaType, ProtectionPriority, RiskLevel, VulnerabilityAssessment, VulnerableGroup,
};

/// Assess the vulnerability picture for an area type and NO2 level.
pub fn analyze(area_type: AreaType, no2_level: f64) -> VulnerabilityAssessment {
    let risk_level = risk_level_for(no2_level, area_type);
    VulnerabilityAssessment {
        area_type,
        vulnerable_groups: identify_vulnerable_groups(area_type),
        risk_level,
        risk_factors: risk_factors_for(area_type, no2_level),
        protection_priority: if matches!(risk_level, RiskLevel::Alto | RiskLevel::MuyAlto) {
            ProtectionPriority::Alta
        } else {
            ProtectionPriority::Media
        },
    }
}

fn identify_vulnerable_groups(area_type: AreaType) -> Vec<VulnerableGroup> {
    use VulnerableGroup::*;

    let mut groups = vec![Children, Elderly, Asthmatics];
    match area_type {
        AreaType::UrbanCenter => groups.extend([Schools, Hospitals, OutdoorWorkers]),
        AreaType::Industrial => groups.extend([Schools, LowIncome, OutdoorWorkers]),
        AreaType::Residential => groups.extend([Schools, ElderlyCommunities]),
    }
    groups
}

fn risk_level_for(no2_level: f64, area_type: AreaType) -> RiskLevel {
    let base_risk = if no2_level > 60.0 {
        RiskLevel::MuyAlto
    } else if no2_level > 40.0 {
        RiskLevel::Alto
    } else if no2_level > 20.0 {
        RiskLevel::Moderado
    } else {
        RiskLevel::Bajo
    };

    // Dense areas escalate exactly one tier; Bajo and Muy Alto never move.
    match (area_type, base_risk) {
        (AreaType::UrbanCenter | AreaType::Industrial, RiskLevel::Moderado) => RiskLevel::Alto,
        (AreaType::UrbanCenter | AreaType::Industrial, RiskLevel::Alto) => RiskLevel::MuyAlto,
        (_, base) => base,
    }
}

fn risk_factors_for(area_type: AreaType, no2_level: f64) -> Vec<String> {
    let mut factors = Vec::new();
    if no2_level > 30.0 {
        factors.push("Alta concentración de NO2".to_string());
    }
    match area_type {
        AreaType::UrbanCenter => factors.push("Alta densidad de tráfico".to_string()),
        AreaType::Industrial => factors.push("Proximidad a zonas industriales".to_string()),
        AreaType::Residential => {}
    }
    if factors.is_empty() {
        factors.push("Condiciones normales".to_string());
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moderate_risk_escalates_in_urban_center() {
        let assessment = analyze(AreaType::UrbanCenter, 25.0);
        assert_eq!(assessment.risk_level, RiskLevel::Alto);
        assert_eq!(assessment.protection_priority, ProtectionPriority::Alta);
    }

    #[test]
    fn moderate_risk_stays_moderate_in_residential() {
        let assessment = analyze(AreaType::Residential, 25.0);
        assert_eq!(assessment.risk_level, RiskLevel::Moderado);
        assert_eq!(assessment.protection_priority, ProtectionPriority::Media);
    }

    #[test]
    fn high_risk_escalates_to_very_high_in_industrial() {
        assert_eq!(analyze(AreaType::Industrial, 45.0).risk_level, RiskLevel::MuyAlto);
    }

    #[test]
    fn extreme_tiers_never_escalate() {
        assert_eq!(analyze(AreaType::UrbanCenter, 10.0).risk_level, RiskLevel::Bajo);
        assert_eq!(analyze(AreaType::UrbanCenter, 80.0).risk_level, RiskLevel::MuyAlto);
    }

    #[test]
    fn vulnerable_groups_extend_the_baseline() {
        use VulnerableGroup::*;

        let urban = analyze(AreaType::UrbanCenter, 25.0).vulnerable_groups;
        for group in [Children, Elderly, Asthmatics, Schools, Hospitals, OutdoorWorkers] {
            assert!(urban.contains(&group), "urban missing {group:?}");
        }

        let industrial = analyze(AreaType::Industrial, 25.0).vulnerable_groups;
        assert!(industrial.contains(&LowIncome));
        assert!(!industrial.contains(&Hospitals));

        let residential = analyze(AreaType::Residential, 25.0).vulnerable_groups;
        assert!(residential.contains(&ElderlyCommunities));
        assert!(!residential.contains(&OutdoorWorkers));
    }

    #[test]
    fn risk_factors_accumulate() {
        let factors = analyze(AreaType::UrbanCenter, 35.0).risk_factors;
        assert_eq!(
            factors,
            vec![
                "Alta concentración de NO2".to_string(),
                "Alta densidad de tráfico".to_string(),
            ]
        );

        let calm = analyze(AreaType::Residential, 10.0).risk_factors;
        assert_eq!(calm, vec!["Condiciones normales".to_string()]);
    }
}
