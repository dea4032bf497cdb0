#[cfg(test)]
mod tests {
    use crate::api::SITE_NOT_FOUND_MESSAGE;
    use crate::config::DashboardConfig;
    use crate::models::RawRecord;
    use crate::services::cleaning::load_and_clean;
    use crate::services::dashboard::build_dashboard;
    use crate::services::summary::site_summary;

    fn config() -> DashboardConfig {
        let mut config = DashboardConfig::default();
        config.sites.allowed = vec!["SiteA".to_string(), "SiteQuiet".to_string()];
        config.sites.default = "SiteA".to_string();
        config
    }

    fn raw(when: &str, hsig: f64, direction: f64) -> RawRecord {
        RawRecord {
            site: "SiteA".to_string(),
            date_time: when.to_string(),
            hsig: Some(hsig),
            hmax: Some(hsig * 2.0),
            tp: Some(11.0),
            tz: Some(-99.9),
            direction: Some(direction),
        }
    }

    fn rows() -> Vec<RawRecord> {
        vec![
            raw("2024-04-14T01:00:00", 1.5, 100.0),
            raw("2024-04-14T00:00:00", 1.0, 90.0),
            raw("2024-04-14T00:30:00", 2.0, 80.0),
        ]
    }

    #[test]
    fn test_dashboard_for_site() {
        let config = config();
        let table = load_and_clean(rows(), &config.sites.allowed).unwrap();
        let data = build_dashboard(&table, "SiteA", &config);

        assert!(data.message.is_none());
        assert_eq!(data.site, "SiteA");
        assert!(!data.rose.is_empty());
        assert_eq!(data.height.len(), 2);
        assert_eq!(data.period.len(), 2);
        assert_eq!(data.direction.len(), 1);

        let hsig = &data.height[0];
        assert_eq!(hsig.name, "Hsig");
        let values: Vec<Option<f64>> = hsig.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(1.5)]);

        // Tz was all sentinel, so every point is a gap.
        assert!(data.period[1].points.iter().all(|p| p.value.is_none()));
    }

    #[test]
    fn test_dashboard_unknown_site() {
        let config = config();
        let table = load_and_clean(rows(), &config.sites.allowed).unwrap();
        let data = build_dashboard(&table, "Atlantis", &config);

        assert!(data.is_empty());
        assert_eq!(data.message.as_deref(), Some(SITE_NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_dashboard_allowed_site_without_rows() {
        let config = config();
        let table = load_and_clean(rows(), &config.sites.allowed).unwrap();
        let data = build_dashboard(&table, "SiteQuiet", &config);

        assert!(data.is_empty());
        assert!(data.message.is_some());
    }

    #[test]
    fn test_site_summary() {
        let config = config();
        let table = load_and_clean(rows(), &config.sites.allowed).unwrap();
        let summary = site_summary(&table, "SiteA");

        assert_eq!(summary.observation_count, 3);
        assert_eq!(summary.significant_height.count, 3);
        assert_eq!(summary.significant_height.mean, 1.5);
        assert_eq!(summary.max_height.max, 4.0);
        assert_eq!(summary.mean_period.count, 0);
        assert_eq!(
            summary.first_timestamp.unwrap().to_string(),
            "2024-04-14 00:00:00"
        );
        assert_eq!(
            summary.last_timestamp.unwrap().to_string(),
            "2024-04-14 01:00:00"
        );
        assert_eq!(summary.dominant_direction, Some(crate::models::Compass::E));
    }

    #[test]
    fn test_site_summary_unknown_site() {
        let config = config();
        let table = load_and_clean(rows(), &config.sites.allowed).unwrap();
        let summary = site_summary(&table, "Atlantis");
        assert_eq!(summary.observation_count, 0);
        assert!(summary.first_timestamp.is_none());
        assert!(summary.dominant_direction.is_none());
    }
}
