//! Tiered advisory generation per audience.

use crate::models::{RecommendationSet, VulnerableGroup};

/// Build the per-audience advisory lists for a pollutant level.
///
/// Each audience has its own threshold ladder; within an audience only the
/// matched tier's text is emitted (tiers are not cumulative). Audiences
/// other than the general public only receive advisories when their group
/// is present in the vulnerability assessment.
pub fn recommend(no2_level: f64, vulnerable_groups: &[VulnerableGroup]) -> RecommendationSet {
    let mut recommendations = RecommendationSet::default();

    if no2_level > 40.0 {
        recommendations.general.extend([
            "Evitar actividades al aire libre prolongadas".to_string(),
            "Usar mascarilla en exteriores".to_string(),
            "Mantener ventanas cerradas".to_string(),
        ]);
        recommendations
            .immediate_actions
            .push("Activar protocolos de calidad del aire".to_string());
    } else if no2_level > 20.0 {
        recommendations.general.extend([
            "Limitar actividades físicas intensas al aire libre".to_string(),
            "Monitorear síntomas respiratorios".to_string(),
        ]);
    } else {
        recommendations
            .general
            .push("Calidad del aire aceptable, tomar precauciones normales".to_string());
    }

    if vulnerable_groups.contains(&VulnerableGroup::Schools) {
        if no2_level > 35.0 {
            recommendations.for_schools.extend([
                "Suspender educación física al aire libre".to_string(),
                "Mantener estudiantes en interiores durante recreo".to_string(),
                "Activar sistema de purificación de aire en aulas".to_string(),
            ]);
        } else if no2_level > 20.0 {
            recommendations.for_schools.extend([
                "Reducir tiempo de actividades al aire libre".to_string(),
                "Monitorear estudiantes con asma o condiciones respiratorias".to_string(),
            ]);
        }
    }

    if vulnerable_groups.contains(&VulnerableGroup::Elderly) {
        if no2_level > 30.0 {
            recommendations.for_elderly.extend([
                "Evitar salidas no esenciales".to_string(),
                "Realizar ejercicios en interiores".to_string(),
                "Monitorear síntomas respiratorios".to_string(),
            ]);
        } else if no2_level > 20.0 {
            recommendations.for_elderly.extend([
                "Limitar tiempo al aire libre".to_string(),
                "Tener medicamentos respiratorios a mano".to_string(),
            ]);
        }
    }

    if vulnerable_groups.contains(&VulnerableGroup::Hospitals) && no2_level > 30.0 {
        recommendations.for_health_centers.extend([
            "Prepararse para posible aumento de casos respiratorios".to_string(),
            "Revisar inventario de medicamentos para asma".to_string(),
            "Alertar personal sobre condiciones ambientales".to_string(),
        ]);
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use VulnerableGroup::*;

    #[test]
    fn high_level_triggers_strong_tier_and_immediate_action() {
        let set = recommend(45.0, &[Schools]);
        assert_eq!(set.general.len(), 3);
        assert!(set.general[0].contains("Evitar actividades"));
        assert_eq!(
            set.immediate_actions,
            vec!["Activar protocolos de calidad del aire".to_string()]
        );
        // 45 > 35: outdoor activity suspended entirely.
        assert!(set.for_schools[0].contains("Suspender"));
        assert_eq!(set.for_schools.len(), 3);
    }

    #[test]
    fn moderate_level_uses_middle_tiers() {
        let set = recommend(25.0, &[Schools, Elderly]);
        assert_eq!(set.general.len(), 2);
        assert!(set.immediate_actions.is_empty());
        assert!(set.for_schools[0].contains("Reducir tiempo"));
        assert!(set.for_elderly[0].contains("Limitar tiempo"));
    }

    #[test]
    fn low_level_gives_baseline_notice_only() {
        let set = recommend(10.0, &[Schools, Elderly, Hospitals]);
        assert_eq!(
            set.general,
            vec!["Calidad del aire aceptable, tomar precauciones normales".to_string()]
        );
        assert!(set.for_schools.is_empty());
        assert!(set.for_elderly.is_empty());
        assert!(set.for_health_centers.is_empty());
        assert!(set.immediate_actions.is_empty());
    }

    #[test]
    fn audiences_require_their_group() {
        let set = recommend(50.0, &[Children, Asthmatics]);
        assert!(!set.general.is_empty());
        assert!(set.for_schools.is_empty());
        assert!(set.for_elderly.is_empty());
        assert!(set.for_health_centers.is_empty());
    }

    #[test]
    fn hospitals_prepare_for_surge_above_threshold() {
        let set = recommend(32.0, &[Hospitals]);
        assert!(set.for_health_centers[0].contains("aumento de casos respiratorios"));

        let calm = recommend(30.0, &[Hospitals]);
        assert!(calm.for_health_centers.is_empty());
    }
}
