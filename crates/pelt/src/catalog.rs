//! Built-in diagram content.
//!
//! [`elt_pipeline`] describes a modern ELT + streaming data platform: six
//! pipeline stages from sources to orchestration, three cross-cutting
//! summary sections, and a closing line of tips.

use pelt_core::semantic::{DiagramLayout, Footer, Header, SectionDescriptor, StageDescriptor};

/// Returns the end-to-end ELT + streaming pipeline layout.
pub fn elt_pipeline() -> DiagramLayout {
    DiagramLayout::new(
        Header::new("Modern ELT + Streaming Pipeline — End-to-End Diagram").with_subtitle(
            "A layout showing Sources → Ingestion (batch & streaming) → Storage → \
             Transformation → Orchestration → Serving → Monitoring.",
        ),
    )
    .with_stage(
        StageDescriptor::new(SectionDescriptor::new("Sources").with_items([
            "Shopify / Stripe / Sales APIs",
            "MySQL / Postgres",
            "CSV / SFTP",
            "Event Stream (Kafka / Kinesis)",
        ]))
        .with_color("bg-white"),
    )
    .with_stage(StageDescriptor::new(
        SectionDescriptor::new("Ingestion (Batch)")
            .with_items(["Airbyte / Fivetran", "Custom Python Jobs"])
            .with_note("CDC or scheduled"),
    ))
    .with_stage(StageDescriptor::new(
        SectionDescriptor::new("Ingestion (Streaming)")
            .with_items([
                "Kafka Connect / Flink",
                "AWS Kinesis / GCP PubSub",
                "Spark Structured Streaming",
            ])
            .with_note("Low-latency data"),
    ))
    .with_stage(StageDescriptor::new(
        SectionDescriptor::new("Storage")
            .with_items([
                "Data Lake (S3 / GCS / ADLS)",
                "Raw Zone / Bronze",
                "Delta Lake / Apache Iceberg",
            ])
            .with_note("Immutable raw data"),
    ))
    .with_stage(StageDescriptor::new(
        SectionDescriptor::new("Transformation (ELT)")
            .with_items([
                "Data Warehouse (Redshift / BigQuery / Snowflake)",
                "dbt models / SQL",
                "Spark / Flink for heavy lifts",
            ])
            .with_note("Transform inside warehouse"),
    ))
    .with_stage(StageDescriptor::new(
        SectionDescriptor::new("Orchestration").with_items([
            "Airflow / Prefect / Dagster",
            "Job scheduling + dependencies",
            "CI/CD for dbt & streaming jobs",
        ]),
    ))
    .with_summary(SectionDescriptor::new("Serving").with_items([
        "Looker / Tableau / Superset",
        "Feature Store / ML Warehouse",
        "APIs & Materialized Views",
    ]))
    .with_summary(SectionDescriptor::new("Monitoring & Quality").with_items([
        "Great Expectations",
        "Datadog / Prometheus",
        "Monte Carlo / Datafold",
    ]))
    .with_summary(SectionDescriptor::new("Security & Governance").with_items([
        "IAM / Policies / RBAC",
        "Data Catalog (Amundsen / DataHub)",
        "Encryption at rest + audit logs",
    ]))
    .with_footer(Footer::new(
        "Tips:",
        "Keep raw data immutable. Prefer ELT on cloud warehouses. \
         Add schema checks early, monitor both batch & streaming jobs.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let layout = elt_pipeline();
        let titles: Vec<_> = layout.stages().iter().map(|s| s.section().title()).collect();
        assert_eq!(
            titles,
            [
                "Sources",
                "Ingestion (Batch)",
                "Ingestion (Streaming)",
                "Storage",
                "Transformation (ELT)",
                "Orchestration",
            ]
        );
    }

    #[test]
    fn test_notes_and_colors() {
        let layout = elt_pipeline();
        let stages = layout.stages();

        assert_eq!(stages[0].color(), Some("bg-white"));
        assert!(stages[0].section().note().is_none());
        assert_eq!(stages[1].section().note(), Some("CDC or scheduled"));
        assert_eq!(stages[4].section().note(), Some("Transform inside warehouse"));
        assert!(stages[5].section().note().is_none());
        assert!(stages[1..].iter().all(|s| s.color().is_none()));
    }

    #[test]
    fn test_item_totals() {
        let layout = elt_pipeline();
        let bullets: usize = layout.stages().iter().map(|s| s.section().items().len()).sum();
        let arrows: usize = layout.summary().iter().map(|s| s.items().len()).sum();
        assert_eq!(bullets, 18);
        assert_eq!(arrows, 9);
    }

    #[test]
    fn test_header_and_footer() {
        let layout = elt_pipeline();
        assert!(layout.header().title().starts_with("Modern ELT + Streaming Pipeline"));
        assert_eq!(
            layout.header().subtitle(),
            Some(
                "A layout showing Sources → Ingestion (batch & streaming) → Storage → \
                 Transformation → Orchestration → Serving → Monitoring."
            )
        );

        let footer = layout.footer().unwrap();
        assert_eq!(footer.label(), "Tips:");
        assert!(footer.text().ends_with("monitor both batch & streaming jobs."));
    }
}
