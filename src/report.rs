//! Report Assembler: declarative wiring of survey columns to aggregation
//! calls. Each section is described once as a definition table; the builder
//! walks it against whatever row subset it is handed, so full and filtered
//! bundles share one code path.

use crate::aggregate;
use crate::filter::{self, FilterSpec};
use crate::survey as col;
use crate::table::Table;
use crate::types::{
    ClimateComponents, DashboardReport, FilterOptions, FilteredReport, KpiReport, ReportValue,
    Section,
};

/// One computed entry in a report section
enum Op {
    Dist(&'static str),
    Cross {
        a: &'static str,
        b: &'static str,
        label_a: &'static str,
        label_b: &'static str,
    },
    Tally {
        columns: &'static [&'static str],
        top_n: usize,
    },
    SeniorityAverage(&'static str),
    /// Per-group counts of affirmative answers in each metric column
    GroupedYes {
        group: &'static str,
        label: &'static str,
        metrics: &'static [(&'static str, &'static str)],
    },
    /// Top-factor mentions broken down by one demographic column
    Breakdown {
        factors: &'static [&'static str],
        by: &'static str,
        top_n: usize,
    },
}

struct ItemDef {
    key: &'static str,
    op: Op,
}

const fn dist(key: &'static str, column: &'static str) -> ItemDef {
    ItemDef {
        key,
        op: Op::Dist(column),
    }
}

const fn cross(
    key: &'static str,
    a: &'static str,
    label_a: &'static str,
    b: &'static str,
    label_b: &'static str,
) -> ItemDef {
    ItemDef {
        key,
        op: Op::Cross {
            a,
            b,
            label_a,
            label_b,
        },
    }
}

const fn tally(key: &'static str, columns: &'static [&'static str], top_n: usize) -> ItemDef {
    ItemDef {
        key,
        op: Op::Tally { columns, top_n },
    }
}

const DEMOGRAPHICS: &[ItemDef] = &[
    dist("gender_distribution", col::GENDER),
    dist("age_distribution", col::AGE),
    dist("hierarchy_distribution", col::HIERARCHY),
    dist("district_distribution", col::DISTRICT),
    dist("civil_status_distribution", col::CIVIL_STATUS),
    dist("seniority_distribution", col::SENIORITY),
    ItemDef {
        key: "average_seniority",
        op: Op::SeniorityAverage(col::SENIORITY),
    },
    cross(
        "age_hierarchy_distribution",
        col::AGE,
        "age_range",
        col::HIERARCHY,
        "hierarchy",
    ),
    cross(
        "gender_additional_services_cross",
        col::GENDER,
        "gender",
        col::ADDITIONAL_SERVICES,
        "additional_services",
    ),
    ItemDef {
        key: "hierarchy_workload_analysis",
        op: Op::GroupedYes {
            group: col::HIERARCHY,
            label: "hierarchy",
            metrics: &[
                ("additional_services", col::ADDITIONAL_SERVICES),
                ("service_overload", col::SERVICE_OVERLOAD),
            ],
        },
    },
    cross(
        "seniority_knowledge_cross",
        col::SENIORITY,
        "seniority",
        col::OCCUPATIONAL_KNOWLEDGE,
        "knows_services",
    ),
];

const HABITS: &[ItemDef] = &[
    dist("physical_activity_distribution", col::PHYSICAL_ACTIVITY),
    dist("frequency_distribution", col::ACTIVITY_FREQUENCY),
    dist("has_children_distribution", col::HAS_CHILDREN),
    dist("children_count_distribution", col::CHILDREN_COUNT),
    dist("healthy_habits_distribution", col::HEALTHY_HABITS),
    dist("additional_services_distribution", col::ADDITIONAL_SERVICES),
    dist("service_overload_distribution", col::SERVICE_OVERLOAD),
    dist("extra_paid_activity_distribution", col::EXTRA_PAID_ACTIVITY),
    dist("hobbies_distribution", col::HOBBIES),
    cross(
        "activity_quality_cross",
        col::PHYSICAL_ACTIVITY,
        "physical_activity",
        col::NEEDS_IMPROVEMENT,
        "needs_improvement",
    ),
    cross(
        "children_services_cross",
        col::HAS_CHILDREN,
        "has_children",
        col::ADDITIONAL_SERVICES,
        "additional_services",
    ),
    cross(
        "activity_balance_cross",
        col::PHYSICAL_ACTIVITY,
        "physical_activity",
        col::WORK_LIFE_BALANCE,
        "work_life_balance",
    ),
    cross(
        "services_balance_cross",
        col::ADDITIONAL_SERVICES,
        "additional_services",
        col::WORK_LIFE_BALANCE,
        "work_life_balance",
    ),
    cross(
        "healthy_activity_cross",
        col::HEALTHY_HABITS,
        "healthy_habits",
        col::PHYSICAL_ACTIVITY,
        "physical_activity",
    ),
];

const HEALTH: &[ItemDef] = &[
    dist("physical_health_distribution", col::PHYSICAL_HEALTH),
    dist("mental_health_distribution", col::MENTAL_HEALTH),
    dist("chronic_conditions_distribution", col::CHRONIC_CONDITION),
    dist("medical_checkups_distribution", col::MEDICAL_CHECKUP),
    dist("checkup_reasons_distribution", col::CHECKUP_REASON),
    dist("treatment_types_distribution", col::TREATMENT_TYPE),
    dist(
        "psychological_treatment_distribution",
        col::PSYCHOLOGICAL_TREATMENT,
    ),
    dist("work_incidents_distribution", col::WORK_INCIDENTS),
    dist("work_life_balance_distribution", col::WORK_LIFE_BALANCE),
    cross(
        "health_correlation_matrix",
        col::PHYSICAL_HEALTH,
        "physical_health",
        col::MENTAL_HEALTH,
        "mental_health",
    ),
    cross(
        "health_workload_cross",
        col::PHYSICAL_HEALTH,
        "physical_health",
        col::ADDITIONAL_SERVICES,
        "additional_services",
    ),
    cross(
        "health_activity_cross",
        col::PHYSICAL_HEALTH,
        "physical_health",
        col::PHYSICAL_ACTIVITY,
        "physical_activity",
    ),
    cross(
        "accidents_hierarchy_cross",
        col::HIERARCHY,
        "hierarchy",
        col::WORK_INCIDENTS,
        "work_accident",
    ),
    cross(
        "mental_balance_cross",
        col::MENTAL_HEALTH,
        "mental_health",
        col::WORK_LIFE_BALANCE,
        "work_life_balance",
    ),
];

const KNOWLEDGE: &[ItemDef] = &[
    dist("safety_training_distribution", col::SAFETY_TRAINING),
    dist("training_topics_distribution", col::TRAINING_TOPIC),
    dist(
        "occupational_health_knowledge_distribution",
        col::OCCUPATIONAL_KNOWLEDGE,
    ),
    tally("known_services_distribution", col::SERVICE_COLUMNS, 10),
    dist("service_usage_distribution", col::SERVICE_USAGE),
    dist("service_satisfaction_distribution", col::SERVICE_SATISFACTION),
    dist("equipment_access_distribution", col::EQUIPMENT_ACCESS),
    dist(
        "professional_development_distribution",
        col::PROFESSIONAL_DEVELOPMENT,
    ),
    dist("recognition_distribution", col::RECOGNITION),
    dist("communication_distribution", col::COMMUNICATION),
    cross(
        "training_hierarchy_cross",
        col::HIERARCHY,
        "hierarchy",
        col::SAFETY_TRAINING,
        "received_training",
    ),
    cross(
        "knowledge_usage_cross",
        col::OCCUPATIONAL_KNOWLEDGE,
        "knows_services",
        col::SERVICE_USAGE,
        "used_services",
    ),
    cross(
        "training_accidents_cross",
        col::SAFETY_TRAINING,
        "received_training",
        col::WORK_INCIDENTS,
        "work_accident",
    ),
    cross(
        "recognition_hierarchy_cross",
        col::HIERARCHY,
        "hierarchy",
        col::RECOGNITION,
        "feels_recognized",
    ),
    cross(
        "communication_knowledge_cross",
        col::COMMUNICATION,
        "comfortable_communication",
        col::OCCUPATIONAL_KNOWLEDGE,
        "knows_services",
    ),
];

const QUALITY_OF_LIFE: &[ItemDef] = &[
    dist("needs_improvement_distribution", col::NEEDS_IMPROVEMENT),
    tally("top_factors", col::FACTOR_COLUMNS, 10),
    dist(
        "economic_satisfaction_distribution",
        col::ECONOMIC_SATISFACTION,
    ),
    dist(
        "risk_effort_remuneration_distribution",
        col::RISK_EFFORT_REMUNERATION,
    ),
    cross(
        "hierarchy_quality_cross",
        col::HIERARCHY,
        "hierarchy",
        col::NEEDS_IMPROVEMENT,
        "needs_improvement",
    ),
    cross(
        "economic_hierarchy_cross",
        col::HIERARCHY,
        "hierarchy",
        col::ECONOMIC_SATISFACTION,
        "economic_satisfaction",
    ),
    cross(
        "economic_services_cross",
        col::ADDITIONAL_SERVICES,
        "additional_services",
        col::ECONOMIC_SATISFACTION,
        "economic_satisfaction",
    ),
    ItemDef {
        key: "factors_gender_analysis",
        op: Op::Breakdown {
            factors: col::FACTOR_COLUMNS,
            by: col::GENDER,
            top_n: 10,
        },
    },
    ItemDef {
        key: "factors_hierarchy_analysis",
        op: Op::Breakdown {
            factors: col::FACTOR_COLUMNS,
            by: col::HIERARCHY,
            top_n: 5,
        },
    },
];

fn build_section(table: &Table, defs: &[ItemDef]) -> Section {
    let mut section = Section::new();
    for def in defs {
        let value = match &def.op {
            Op::Dist(column) => ReportValue::Distribution(aggregate::distribution(table, column)),
            Op::Cross {
                a,
                b,
                label_a,
                label_b,
            } => ReportValue::CrossTab(aggregate::cross_tab(table, a, b, label_a, label_b)),
            Op::Tally { columns, top_n } => {
                ReportValue::Tally(aggregate::factor_tally(table, columns, *top_n))
            }
            Op::SeniorityAverage(column) => {
                ReportValue::Number(aggregate::seniority_average(table, column))
            }
            Op::GroupedYes {
                group,
                label,
                metrics,
            } => ReportValue::GroupedCounts(aggregate::grouped_match_counts(
                table, group, label, metrics, col::YES,
            )),
            Op::Breakdown { factors, by, top_n } => {
                ReportValue::Breakdown(aggregate::factor_breakdown(table, factors, by, *top_n))
            }
        };
        section.push(def.key, value);
    }
    section
}

pub fn demographics(table: &Table) -> Section {
    build_section(table, DEMOGRAPHICS)
}

pub fn habits(table: &Table) -> Section {
    build_section(table, HABITS)
}

pub fn health(table: &Table) -> Section {
    build_section(table, HEALTH)
}

pub fn knowledge(table: &Table) -> Section {
    build_section(table, KNOWLEDGE)
}

pub fn quality_of_life(table: &Table) -> Section {
    build_section(table, QUALITY_OF_LIFE)
}

/// Key performance indicators for the current row subset
pub fn kpis(table: &Table) -> KpiReport {
    let recognition = aggregate::percentage(table, col::RECOGNITION, col::YES);
    let communication = aggregate::percentage(table, col::COMMUNICATION, col::YES);
    let development = aggregate::percentage(table, col::PROFESSIONAL_DEVELOPMENT, col::YES);

    KpiReport {
        total_responses: table.len() as u64,
        physical_activity_percentage: aggregate::percentage(
            table,
            col::PHYSICAL_ACTIVITY,
            col::YES,
        ),
        needs_improvement_percentage: aggregate::percentage(
            table,
            col::NEEDS_IMPROVEMENT,
            col::YES,
        ),
        safety_training_percentage: aggregate::percentage(table, col::SAFETY_TRAINING, col::YES),
        occupational_knowledge_percentage: aggregate::percentage(
            table,
            col::OCCUPATIONAL_KNOWLEDGE,
            col::YES,
        ),
        medical_checkup_percentage: aggregate::percentage(table, col::MEDICAL_CHECKUP, col::YES),
        additional_services_percentage: aggregate::percentage(
            table,
            col::ADDITIONAL_SERVICES,
            col::YES,
        ),
        integral_health_index: aggregate::conditional_percentage(table, |row| {
            row.is(col::PHYSICAL_HEALTH, col::GOOD_HEALTH)
                && row.is(col::MENTAL_HEALTH, col::GOOD_HEALTH)
        }),
        overload_index: aggregate::conditional_percentage(table, |row| {
            row.is(col::ADDITIONAL_SERVICES, col::YES) && row.is(col::SERVICE_OVERLOAD, col::YES)
        }),
        work_life_balance_index: aggregate::percentage(table, col::WORK_LIFE_BALANCE, col::YES),
        organizational_climate_index: aggregate::composite_index(&[
            recognition,
            communication,
            development,
        ]),
        economic_satisfaction_percentage: aggregate::percentage(
            table,
            col::ECONOMIC_SATISFACTION,
            col::YES,
        ),
        work_accidents_rate: aggregate::percentage(table, col::WORK_INCIDENTS, col::YES),
        service_usage_percentage: aggregate::percentage(table, col::SERVICE_USAGE, col::YES),
        top_factors_to_improve: aggregate::factor_tally(table, col::FACTOR_COLUMNS, 3),
        climate_components: ClimateComponents {
            recognition_percentage: recognition,
            communication_percentage: communication,
            development_percentage: development,
        },
    }
}

/// Distinct values for the dashboard filter controls, always computed over
/// the full dataset
pub fn filter_options(table: &Table) -> FilterOptions {
    FilterOptions {
        distritos: aggregate::unique_sorted_values(table, col::DISTRICT),
        generos: aggregate::unique_sorted_values(table, col::GENDER),
        edades: aggregate::unique_sorted_values(table, col::AGE),
        jerarquias: aggregate::unique_sorted_values(table, col::HIERARCHY),
        estados_civiles: aggregate::unique_sorted_values(table, col::CIVIL_STATUS),
    }
}

/// The complete dashboard bundle over the full dataset
pub fn full_report(table: &Table) -> DashboardReport {
    DashboardReport {
        demographics: demographics(table),
        habits: habits(table),
        health: health(table),
        knowledge: knowledge(table),
        quality_of_life: quality_of_life(table),
        kpis: kpis(table),
        filter_options: filter_options(table),
    }
}

/// Every section recomputed over the filtered row subset
pub fn filtered_report(table: &Table, spec: &FilterSpec) -> FilteredReport {
    let subset = filter::apply(table, spec);
    FilteredReport {
        demographics: demographics(&subset),
        habits: habits(&subset),
        health: health(&subset),
        knowledge: knowledge(&subset),
        quality_of_life: quality_of_life(&subset),
        kpis: kpis(&subset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[(&str, &str)]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(c, v)| (c.to_string(), v.to_string()))
            .collect()
    }

    /// Build a table from sparse (column, value) rows; unmentioned cells
    /// stay missing
    fn sparse_table(columns: &[&str], rows: &[Vec<(String, String)>]) -> Table {
        let data = rows
            .iter()
            .map(|cells| {
                columns
                    .iter()
                    .map(|column| {
                        cells
                            .iter()
                            .find(|(c, _)| c == column)
                            .map(|(_, v)| v.clone())
                    })
                    .collect()
            })
            .collect();
        Table::new(columns.iter().map(|c| c.to_string()).collect(), data)
    }

    fn survey_table() -> Table {
        let columns = [
            col::GENDER,
            col::AGE,
            col::HIERARCHY,
            col::DISTRICT,
            col::CIVIL_STATUS,
            col::SENIORITY,
            col::PHYSICAL_ACTIVITY,
            col::PHYSICAL_HEALTH,
            col::MENTAL_HEALTH,
            col::RECOGNITION,
            col::COMMUNICATION,
            col::PROFESSIONAL_DEVELOPMENT,
            col::FACTOR_COLUMNS[0],
            col::FACTOR_COLUMNS[1],
        ];
        sparse_table(
            &columns,
            &[
                row(&[
                    (col::GENDER, "F"),
                    (col::AGE, "18-25"),
                    (col::HIERARCHY, "Oficial"),
                    (col::DISTRICT, "Centro"),
                    (col::PHYSICAL_ACTIVITY, "Sí"),
                    (col::PHYSICAL_HEALTH, "Buena"),
                    (col::MENTAL_HEALTH, "Buena"),
                    (col::RECOGNITION, "Sí"),
                    (col::COMMUNICATION, "Sí"),
                    (col::PROFESSIONAL_DEVELOPMENT, "No"),
                    (col::FACTOR_COLUMNS[0], "estrés"),
                ]),
                row(&[
                    (col::GENDER, "M"),
                    (col::AGE, "26-35"),
                    (col::HIERARCHY, "Suboficial"),
                    (col::DISTRICT, "Norte"),
                    (col::PHYSICAL_ACTIVITY, "No"),
                    (col::PHYSICAL_HEALTH, "Buena"),
                    (col::MENTAL_HEALTH, "Regular"),
                    (col::RECOGNITION, "No"),
                    (col::COMMUNICATION, "Sí"),
                    (col::PROFESSIONAL_DEVELOPMENT, "No"),
                    (col::FACTOR_COLUMNS[0], "descanso"),
                    (col::FACTOR_COLUMNS[1], "estrés"),
                ]),
                row(&[
                    (col::GENDER, "F"),
                    (col::AGE, "18-25"),
                    (col::HIERARCHY, "Oficial"),
                    (col::DISTRICT, "Centro"),
                    (col::PHYSICAL_ACTIVITY, "Sí"),
                    (col::PHYSICAL_HEALTH, "Regular"),
                    (col::MENTAL_HEALTH, "Buena"),
                    (col::RECOGNITION, "Sí"),
                    (col::COMMUNICATION, "No"),
                    (col::PROFESSIONAL_DEVELOPMENT, "Sí"),
                ]),
                row(&[
                    (col::GENDER, "F"),
                    (col::AGE, "26-35"),
                    (col::HIERARCHY, "Oficial"),
                    (col::DISTRICT, "Sur"),
                    (col::PHYSICAL_ACTIVITY, "Sí"),
                    (col::PHYSICAL_HEALTH, "Buena"),
                    (col::MENTAL_HEALTH, "Buena"),
                    (col::RECOGNITION, "Sí"),
                    (col::COMMUNICATION, "Sí"),
                    (col::PROFESSIONAL_DEVELOPMENT, "Sí"),
                ]),
            ],
        )
    }

    #[test]
    fn test_demographics_section_keys() {
        let table = survey_table();
        let section = demographics(&table);

        let keys: Vec<_> = section.keys().collect();
        assert_eq!(keys[0], "gender_distribution");
        assert!(keys.contains(&"average_seniority"));
        assert!(keys.contains(&"age_hierarchy_distribution"));
        assert!(keys.contains(&"hierarchy_workload_analysis"));
        assert_eq!(keys.len(), 11);
    }

    #[test]
    fn test_hierarchy_workload_counts_affirmatives_per_hierarchy() {
        let columns = [
            col::HIERARCHY,
            col::ADDITIONAL_SERVICES,
            col::SERVICE_OVERLOAD,
        ];
        let table = sparse_table(
            &columns,
            &[
                row(&[
                    (col::HIERARCHY, "Oficial"),
                    (col::ADDITIONAL_SERVICES, "Sí"),
                    (col::SERVICE_OVERLOAD, "Sí"),
                ]),
                row(&[
                    (col::HIERARCHY, "Oficial"),
                    (col::ADDITIONAL_SERVICES, "Sí"),
                    (col::SERVICE_OVERLOAD, "No"),
                ]),
                row(&[
                    (col::HIERARCHY, "Suboficial"),
                    (col::ADDITIONAL_SERVICES, "No"),
                    (col::SERVICE_OVERLOAD, "Sí"),
                ]),
            ],
        );
        let section = demographics(&table);

        match section.get("hierarchy_workload_analysis") {
            Some(ReportValue::GroupedCounts(grouped)) => {
                assert_eq!(grouped.group_label, "hierarchy");
                assert_eq!(grouped.entries.len(), 2);
                assert_eq!(grouped.entries[0].group, "Oficial");
                assert_eq!(
                    grouped.entries[0].counts,
                    vec![("additional_services", 2), ("service_overload", 1)]
                );
                assert_eq!(
                    grouped.entries[1].counts,
                    vec![("additional_services", 0), ("service_overload", 1)]
                );
            }
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn test_quality_of_life_factor_breakdowns() {
        let table = survey_table();
        let section = quality_of_life(&table);

        match section.get("factors_gender_analysis") {
            Some(ReportValue::Breakdown(breakdown)) => {
                // "estrés" named by one F row and one M row
                assert_eq!(breakdown.entries()[0].0, "estrés");
                assert_eq!(breakdown.get("estrés").and_then(|d| d.get("F")), Some(&1));
                assert_eq!(breakdown.get("estrés").and_then(|d| d.get("M")), Some(&1));
                assert_eq!(breakdown.get("descanso").and_then(|d| d.get("M")), Some(&1));
            }
            other => panic!("unexpected value: {:?}", other),
        }

        match section.get("factors_hierarchy_analysis") {
            Some(ReportValue::Breakdown(breakdown)) => {
                assert_eq!(
                    breakdown.get("estrés").and_then(|d| d.get("Oficial")),
                    Some(&1)
                );
                assert_eq!(
                    breakdown.get("estrés").and_then(|d| d.get("Suboficial")),
                    Some(&1)
                );
            }
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn test_gender_distribution_values() {
        let table = survey_table();
        let section = demographics(&table);

        match section.get("gender_distribution") {
            Some(ReportValue::Distribution(dist)) => {
                assert_eq!(dist.get("F"), Some(&3));
                assert_eq!(dist.get("M"), Some(&1));
            }
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn test_age_hierarchy_cross_counts() {
        let table = survey_table();
        let section = demographics(&table);

        match section.get("age_hierarchy_distribution") {
            Some(ReportValue::CrossTab(cross)) => {
                assert_eq!(cross.total(), 4);
                let first = &cross.entries[0];
                assert_eq!(first.a, "18-25");
                assert_eq!(first.b, "Oficial");
                assert_eq!(first.count, 2);
            }
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn test_kpis_on_sample() {
        let table = survey_table();
        let report = kpis(&table);

        assert_eq!(report.total_responses, 4);
        assert_eq!(report.physical_activity_percentage, 75.0);
        // both physical and mental health "Buena": rows 1 and 4
        assert_eq!(report.integral_health_index, 50.0);
        // recognition 75, communication 75, development 50
        assert_eq!(report.climate_components.recognition_percentage, 75.0);
        assert_eq!(report.climate_components.development_percentage, 50.0);
        assert_eq!(report.organizational_climate_index, 66.67);
    }

    #[test]
    fn test_kpis_tally_ranked_with_first_seen_ties() {
        let table = survey_table();
        let report = kpis(&table);

        let entries = report.top_factors_to_improve.entries();
        assert_eq!(entries[0], ("estrés".to_string(), 2));
        assert_eq!(entries[1], ("descanso".to_string(), 1));
    }

    #[test]
    fn test_kpis_missing_columns_resolve_to_zero() {
        let table = survey_table();
        let report = kpis(&table);

        // columns absent from this dataset
        assert_eq!(report.safety_training_percentage, 0.0);
        assert_eq!(report.overload_index, 0.0);
    }

    #[test]
    fn test_kpis_empty_table() {
        let table = Table::new(vec![col::PHYSICAL_ACTIVITY.to_string()], vec![]);
        let report = kpis(&table);

        assert_eq!(report.total_responses, 0);
        assert_eq!(report.physical_activity_percentage, 0.0);
        assert_eq!(report.work_life_balance_index, 0.0);
    }

    #[test]
    fn test_filtered_report_matches_standalone_subset() {
        let table = survey_table();
        let spec = FilterSpec {
            gender: Some("F".to_string()),
            ..Default::default()
        };

        let filtered = filtered_report(&table, &spec);
        let standalone = filter::apply(&table, &spec);

        assert_eq!(filtered.kpis, kpis(&standalone));
        assert_eq!(filtered.demographics, demographics(&standalone));
        // every F row reports physical activity
        assert_eq!(filtered.kpis.physical_activity_percentage, 100.0);
        assert_eq!(filtered.kpis.total_responses, 3);
    }

    #[test]
    fn test_filter_options_sorted_unique() {
        let table = survey_table();
        let options = filter_options(&table);

        assert_eq!(options.distritos, vec!["Centro", "Norte", "Sur"]);
        assert_eq!(options.generos, vec!["F", "M"]);
        assert!(options.jerarquias.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_full_report_serializes_every_section() {
        let table = survey_table();
        let report = full_report(&table);

        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "demographics",
            "habits",
            "health",
            "knowledge",
            "quality_of_life",
            "kpis",
            "filter_options",
        ] {
            assert!(json.get(key).is_some(), "missing section {}", key);
        }
        assert!(json["quality_of_life"]["top_factors"].is_object());
        assert!(json["quality_of_life"]["factors_gender_analysis"].is_object());
        assert!(json["demographics"]["hierarchy_workload_analysis"].is_array());
        assert!(json["habits"]["activity_quality_cross"].is_array());
    }
}
