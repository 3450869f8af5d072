//! Analytics screen projection

use srm_data::analytics;

use crate::cards::{metric_cards, teaching_cards, StatCard};
use crate::charts::{
    department_bars, department_pie, enrollment_trend_areas, gpa_histogram, graduation_lines,
    AreaSeries, BarSeries, LineSeries, PieSlice,
};

/// Render-ready analytics screen
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub metrics: Vec<StatCard>,
    pub enrollment: Vec<AreaSeries>,
    pub department_pie: Vec<PieSlice>,
    pub department_bars: BarSeries,
    pub gpa: BarSeries,
    pub graduation: Vec<LineSeries>,
    pub teaching: Vec<StatCard>,
}

/// Project the analytics screen from the static series
pub fn analytics_dashboard() -> AnalyticsView {
    AnalyticsView {
        heading: "Analytics Dashboard",
        subheading: "Comprehensive insights and performance metrics",
        metrics: metric_cards(&analytics::headline_metrics()),
        enrollment: enrollment_trend_areas(&analytics::enrollment_trend()),
        department_pie: department_pie(&analytics::department_distribution()),
        department_bars: department_bars(&analytics::department_distribution()),
        gpa: gpa_histogram(&analytics::gpa_distribution()),
        graduation: graduation_lines(&analytics::graduation_trend()),
        teaching: teaching_cards(&analytics::teaching_figures()),
    }
}
