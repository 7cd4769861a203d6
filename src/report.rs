//! Plain-text rendering of the activity detail screen.

use std::fmt::Write;

use crate::chart::{derive_chart, ChartLayout};
use crate::config::Locale;
use crate::detail::PartialActivityDetail;
use crate::error::HeartRateError;
use crate::models::{ActivityDetail, HeartRateSample, ZoneTimeSpent};
use crate::score::{compute_score, SampleStats};
use crate::zone_label::{format_duration, label_color};

struct Strings {
    score_title: &'static str,
    avg: &'static str,
    min_max: (&'static str, &'static str),
    score: &'static str,
    no_samples: &'static str,
    chart_title: &'static str,
    visible_range: &'static str,
    band: &'static str,
    rule: &'static str,
    zones_title: &'static str,
    time_in_zones: &'static str,
}

const EN: Strings = Strings {
    score_title: "Training score",
    avg: "Average heart rate",
    min_max: ("Min", "Max"),
    score: "Score",
    no_samples: "No heart rate data.",
    chart_title: "Heart rate chart",
    visible_range: "Visible range",
    band: "Zone",
    rule: "Boundary",
    zones_title: "Heart rate zones",
    time_in_zones: "Time in zones",
};

const PL: Strings = Strings {
    score_title: "Wynik treningu",
    avg: "Średnie tętno",
    min_max: ("Min", "Max"),
    score: "Punktacja",
    no_samples: "Brak danych o tętnie.",
    chart_title: "Wykres tętna",
    visible_range: "Zakres osi",
    band: "Strefa",
    rule: "Granica",
    zones_title: "Strefy tętna",
    time_in_zones: "Czas w strefach",
};

fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::En => &EN,
        Locale::Pl => &PL,
    }
}

pub fn render_detail(detail: &ActivityDetail, locale: Locale) -> String {
    let chart = derive_chart(&detail.samples, Some(&detail.zones));
    let mut out = String::new();
    score_section(&mut out, &detail.samples, locale);
    chart_section(&mut out, &chart, locale);
    time_spent_section(&mut out, &detail.time_spent, locale);
    out
}

/// Renders whichever parts arrived. A failed piece is replaced by its
/// localized error message.
pub fn render_partial(detail: &PartialActivityDetail, locale: Locale) -> String {
    let mut out = String::new();
    match &detail.samples {
        Ok(samples) => {
            score_section(&mut out, samples, locale);
            let chart = derive_chart(samples, detail.zones.as_ref().ok());
            chart_section(&mut out, &chart, locale);
        }
        Err(e) => error_line(&mut out, strings(locale).chart_title, e, locale),
    }
    if let Err(e) = &detail.zones {
        error_line(&mut out, strings(locale).zones_title, e, locale);
    }
    match &detail.time_spent {
        Ok(spent) => time_spent_section(&mut out, spent, locale),
        Err(e) => error_line(&mut out, strings(locale).time_in_zones, e, locale),
    }
    out
}

fn error_line(out: &mut String, title: &str, err: &HeartRateError, locale: Locale) {
    let _ = writeln!(out, "{}: {}", title, err.localized(locale));
}

fn score_section(out: &mut String, samples: &[HeartRateSample], locale: Locale) {
    let s = strings(locale);
    let _ = writeln!(out, "{}", s.score_title);
    if samples.is_empty() {
        let _ = writeln!(out, "  {}", s.no_samples);
        return;
    }
    let stats = SampleStats::from_samples(samples);
    let score = compute_score(stats.avg, stats.min, stats.max);
    let _ = writeln!(out, "  {}: {} bpm", s.avg, stats.avg);
    let _ = writeln!(
        out,
        "  {}: {} bpm, {}: {} bpm",
        s.min_max.0, stats.min, s.min_max.1, stats.max
    );
    let _ = writeln!(out, "  {}: {}", s.score, score);
}

fn chart_section(out: &mut String, chart: &ChartLayout, locale: Locale) {
    let s = strings(locale);
    let _ = writeln!(out, "{}", s.chart_title);
    let _ = writeln!(
        out,
        "  {}: {}-{} bpm",
        s.visible_range, chart.range.lower, chart.range.upper
    );
    if let Some((start, end)) = chart.time_span {
        let _ = writeln!(out, "  {} - {}", start.to_rfc3339(), end.to_rfc3339());
    }
    for band in &chart.bands {
        let _ = writeln!(
            out,
            "  {} {} [{}, {}] {}",
            s.band,
            band.zone,
            band.lower,
            band.upper,
            band.color.name()
        );
    }
    for rule in &chart.rules {
        let _ = writeln!(out, "  {} {} = {} bpm", s.rule, rule.label, rule.value);
    }
}

fn time_spent_section(out: &mut String, spent: &ZoneTimeSpent, locale: Locale) {
    let s = strings(locale);
    let _ = writeln!(out, "{} (max {} bpm)", s.time_in_zones, spent.max_heart_rate);
    for item in &spent.zones {
        let duration = if item.duration.trim().is_empty() {
            format_duration(item.seconds)
        } else {
            item.duration.clone()
        };
        let _ = writeln!(
            out,
            "  {:<6} {:<7} {} {:>5.1}%",
            item.zone,
            label_color(&item.zone).name(),
            duration,
            spent.share_percent(item)
        );
    }
}
