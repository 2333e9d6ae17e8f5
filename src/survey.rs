//! The fixed survey schema contract.
//!
//! Columns are addressed by the exact survey question text, as it appears in
//! the spreadsheet export after header trimming. Double spaces inside some
//! question strings are part of the source form and must be preserved.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Affirmative answer token for yes/no questions
pub const YES: &str = "Sí";

/// Rating used by the health self-assessment questions
pub const GOOD_HEALTH: &str = "Buena";

// Demographics
pub const GENDER: &str = "Género";
pub const AGE: &str = "Edad";
pub const HIERARCHY: &str = "Jerarquía";
pub const DISTRICT: &str = "Distrito";
pub const CIVIL_STATUS: &str = "Estado Civil";
pub const SENIORITY: &str = "Antigüedad de Servicio";

// Habits and workload
pub const PHYSICAL_ACTIVITY: &str = "¿Realiza algún tipo de actividad física?";
pub const ACTIVITY_FREQUENCY: &str = "¿Con qué frecuencia?";
pub const HAS_CHILDREN: &str = "¿Tiene hijos?";
pub const CHILDREN_COUNT: &str = "¿Cantidad de hijos?";
pub const HEALTHY_HABITS: &str =
    "¿Consideras que tienen hábitos tendientes a un estilo de  vida sano?";
pub const ADDITIONAL_SERVICES: &str = "¿Realiza servicios adicionales?";
pub const SERVICE_OVERLOAD: &str = "¿Tiene recargo de servicios?";
pub const EXTRA_PAID_ACTIVITY: &str = "¿Realizas alguna actividad remunerada extra?";
pub const HOBBIES: &str = "¿Tiene algún hobbies?";

// Health
pub const PHYSICAL_HEALTH: &str = "Salud física actual";
pub const MENTAL_HEALTH: &str = "Salud mental actual";
pub const CHRONIC_CONDITION: &str = "Padecimiento base o crónico";
pub const MEDICAL_CHECKUP: &str = "¿Se ha realizado algún chequeo en los últimos 12 meses?";
pub const CHECKUP_REASON: &str = "En caso afirmativo, ¿Cuál fue el motivo?";
pub const TREATMENT_TYPE: &str = "Tipo de Tratamiento";
pub const PSYCHOLOGICAL_TREATMENT: &str = "Tipo de Tratamiento Psicológico";
pub const WORK_INCIDENTS: &str =
    "¿Has experimentado algún incidente o accidente laboral en los últimos 12 meses?";
pub const WORK_LIFE_BALANCE: &str =
    "¿Te sientes cómodo con el equilibrio entre tu vida laboral y personal?";

// Knowledge and training
pub const SAFETY_TRAINING: &str =
    "¿Has recibido capacitación en seguridad y salud en el trabajo en los últimos 12 meses?";
pub const TRAINING_TOPIC: &str = "¿Sobre qué temática?";
pub const OCCUPATIONAL_KNOWLEDGE: &str =
    "¿Tiene conocimiento  de los servicios relacionados a la salud ocupacional que proporciona la institución policial?";
pub const SERVICE_USAGE: &str = "¿Los ha utilizado?";
pub const SERVICE_SATISFACTION: &str = "¿Esta conforme?";
pub const EQUIPMENT_ACCESS: &str =
    "¿Tienes acceso a equipos y herramientas adecuadas para realizar sus funciones?";
pub const PROFESSIONAL_DEVELOPMENT: &str =
    "¿Tienes oportunidades para el desarrollo profesional y el ascenso?";
pub const RECOGNITION: &str = "¿Te sientes valorado y reconocido por tus superiores?";
pub const COMMUNICATION: &str =
    "¿Te sientes cómodo comunicándote con tus superiores y compañeros?";

// Quality of life
pub const NEEDS_IMPROVEMENT: &str =
    "¿Considera que debe mejorar algunos de estos factores para contribuir a una mejor calidad de vida?";
pub const ECONOMIC_SATISFACTION: &str =
    "¿Te sientes satisfecho con la situación económica de su hogar?";
pub const RISK_EFFORT_REMUNERATION: &str =
    "¿Sientes que hay congruencias entre el riesgo y el esfuerzo en relación a la remuneración recibida?";

/// Multi-select "which factors should improve" question, spread across one
/// free-text column and six spill-over columns
pub const FACTOR_COLUMNS: &[&str] = &[
    "*¿Cuáles?",
    "Columna1",
    "Columna2",
    "Columna3",
    "Columna4",
    "Columna5",
    "Columna6",
];

/// Multi-select "which occupational health services do you know" question
pub const SERVICE_COLUMNS: &[&str] = &[
    "Señale cuales",
    "Señale cuales2",
    "Señale cuales3",
    "Señale cuales4",
    "Señale cuales5",
];

/// Representative midpoint (in years) for each seniority band. Bands not in
/// this table are excluded from the average, not counted as zero.
pub static SENIORITY_MIDPOINTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("Menos de 1 año", 0.5),
        ("1 a 5 años", 3.0),
        ("6 a 10 años", 8.0),
        ("11 a 15 años", 13.0),
        ("16 a 20 años", 18.0),
        ("21 a 25 años", 23.0),
        ("26 a 30 años", 28.0),
        ("Más de 30 años", 35.0),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_midpoints() {
        assert_eq!(SENIORITY_MIDPOINTS.get("1 a 5 años"), Some(&3.0));
        assert_eq!(SENIORITY_MIDPOINTS.get("Más de 30 años"), Some(&35.0));
        assert_eq!(SENIORITY_MIDPOINTS.get("Desconocido"), None);
    }

    #[test]
    fn test_multi_select_column_lists() {
        assert_eq!(FACTOR_COLUMNS.len(), 7);
        assert_eq!(SERVICE_COLUMNS.len(), 5);
    }
}
