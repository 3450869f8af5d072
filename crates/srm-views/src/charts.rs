//! Render-ready chart series
//!
//! Builders map the static analytics samples to the series a chart renderer
//! consumes. No drawing happens here.

use srm_data::analytics::{DepartmentShare, EnrollmentMonth, GpaBand, GraduationYear};

const BLUE: [u8; 3] = [59, 130, 246];
const GREEN: [u8; 3] = [16, 185, 129];
const PURPLE: [u8; 3] = [139, 92, 246];

/// A labelled point on a category or time axis
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// A filled series on the stacked-area chart
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSeries {
    pub name: String,
    pub color: [u8; 3],
    pub points: Vec<SeriesPoint>,
}

/// A bar series over category labels
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: [u8; 3],
    pub points: Vec<SeriesPoint>,
}

/// A line series over a time axis
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: [u8; 3],
    pub points: Vec<SeriesPoint>,
}

/// One slice of the department pie, with its share of the whole
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub share: f64,
    pub color: [u8; 3],
}

/// Student and course counts per month as stacked areas
pub fn enrollment_trend_areas(months: &[EnrollmentMonth]) -> Vec<AreaSeries> {
    let points = |pick: fn(&EnrollmentMonth) -> u32| {
        months
            .iter()
            .map(|month| SeriesPoint {
                label: month.month.to_string(),
                value: pick(month) as f64,
            })
            .collect()
    };

    vec![
        AreaSeries {
            name: "Students".to_string(),
            color: BLUE,
            points: points(|month| month.students),
        },
        AreaSeries {
            name: "Courses".to_string(),
            color: GREEN,
            points: points(|month| month.courses),
        },
    ]
}

/// Department head counts as pie slices
pub fn department_pie(shares: &[DepartmentShare]) -> Vec<PieSlice> {
    let total: u32 = shares.iter().map(|share| share.students).sum();
    shares
        .iter()
        .map(|share| PieSlice {
            label: share.department.label().to_string(),
            value: share.students as f64,
            share: if total == 0 {
                0.0
            } else {
                share.students as f64 / total as f64
            },
            color: share.color,
        })
        .collect()
}

/// Department head counts as a horizontal bar series
pub fn department_bars(shares: &[DepartmentShare]) -> BarSeries {
    BarSeries {
        name: "Students".to_string(),
        color: BLUE,
        points: shares
            .iter()
            .map(|share| SeriesPoint {
                label: share.department.label().to_string(),
                value: share.students as f64,
            })
            .collect(),
    }
}

/// GPA range counts as a histogram series
pub fn gpa_histogram(bands: &[GpaBand]) -> BarSeries {
    BarSeries {
        name: "Students".to_string(),
        color: PURPLE,
        points: bands
            .iter()
            .map(|band| SeriesPoint {
                label: band.range.to_string(),
                value: band.count as f64,
            })
            .collect(),
    }
}

/// Enrollment vs graduation counts as line series
pub fn graduation_lines(years: &[GraduationYear]) -> Vec<LineSeries> {
    let points = |pick: fn(&GraduationYear) -> u32| {
        years
            .iter()
            .map(|year| SeriesPoint {
                label: year.year.to_string(),
                value: pick(year) as f64,
            })
            .collect()
    };

    vec![
        LineSeries {
            name: "Enrolled Students".to_string(),
            color: BLUE,
            points: points(|year| year.enrolled),
        },
        LineSeries {
            name: "Graduated Students".to_string(),
            color: GREEN,
            points: points(|year| year.graduated),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use srm_data::analytics;

    #[test]
    fn test_pie_shares_sum_to_one() {
        let slices = department_pie(&analytics::department_distribution());
        let total: f64 = slices.iter().map(|slice| slice.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_pie_has_zero_shares() {
        assert!(department_pie(&[]).is_empty());
    }

    #[test]
    fn test_area_series_cover_every_month() {
        let areas = enrollment_trend_areas(&analytics::enrollment_trend());
        assert_eq!(areas.len(), 2);
        assert!(areas.iter().all(|series| series.points.len() == 12));
        assert_eq!(areas[0].points[7].value, 850.0);
    }

    #[test]
    fn test_graduation_lines_track_years() {
        let lines = graduation_lines(&analytics::graduation_trend());
        assert_eq!(lines[0].name, "Enrolled Students");
        assert_eq!(lines[0].points.last().unwrap().value, 2847.0);
        assert_eq!(lines[1].points.last().unwrap().value, 485.0);
    }
}
