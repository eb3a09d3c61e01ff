use std::fmt::Write;

use seimei_gokaku::{Candidate, Rank, RankEntry, RankTable, ResultGroup, SearchOutcome};

fn group_title(group: &ResultGroup) -> String {
    match &group.filter_kanji {
        Some(kanji) => format!("「{kanji}」を使った名前の候補"),
        None => "名前の候補".to_string(),
    }
}

fn grid_line(label: &str, strokes: i64, entry: RankEntry) -> String {
    format!("{label}… {strokes}画（{}）", entry.label)
}

/// Five grid lines for one candidate.
pub(crate) fn render_breakdown(candidate: &Candidate, indent: &str) -> String {
    let grid = &candidate.grid;
    let ranks = &candidate.ranks;
    let lines = [
        grid_line("天格", grid.heaven, ranks.heaven),
        grid_line("人格", grid.person, ranks.person),
        grid_line("地格", grid.earth, ranks.earth),
        grid_line("外格", grid.outer, ranks.outer),
        grid_line("総格", grid.total, ranks.total),
    ];
    let mut out = String::new();
    for line in lines {
        let _ = writeln!(out, "{indent}{line}");
    }
    out
}

pub(crate) fn render_candidate(candidate: &Candidate) -> String {
    let mut out = format!(
        "{} {} の五格\n",
        candidate.family_name, candidate.given_name
    );
    out.push_str(&render_breakdown(candidate, "  "));
    out
}

pub(crate) fn render_outcome(outcome: &SearchOutcome, details: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "合計{}件の候補を表示しています。",
        outcome.total_candidates()
    );

    for group in &outcome.groups {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({}件)", group_title(group), group.len());
        for candidate in &group.candidates {
            let _ = writeln!(
                out,
                "  {} {}\t{}画\t{}",
                candidate.family_name,
                candidate.given_name,
                candidate.grid.total,
                candidate.ranks.total.label
            );
            if details {
                out.push_str(&render_breakdown(candidate, "      "));
            }
        }
    }
    out
}

pub(crate) fn render_ranks(table: &RankTable) -> String {
    let tiers = table.tiers();
    let mut out = String::new();
    for rank in Rank::TIERS {
        let counts: Vec<String> = tiers.counts(rank).iter().map(i64::to_string).collect();
        let _ = writeln!(
            out,
            "{}\t{}\t(score {})\t{}",
            rank.label(),
            rank.id(),
            rank.score(),
            counts.join(" ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seimei_gokaku::{EngineConfig, NamePool, SearchQuery, SeimeiEngine};
    use seimei_strokes::{NoopDiagnostics, StrokeTable};

    fn engine() -> SeimeiEngine {
        let strokes = StrokeTable::from_entries([
            ("田", 5),
            ("中", 4),
            ("太", 4),
            ("郎", 9),
            ("花", 7),
            ("子", 3),
        ])
        .unwrap();
        SeimeiEngine::new(strokes, NamePool::new(["太郎", "花子"]), EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_render_unfiltered_outcome() {
        let outcome = engine()
            .search(
                &SearchQuery {
                    family_name: "田中".to_string(),
                    ..SearchQuery::default()
                },
                &mut NoopDiagnostics,
            )
            .unwrap();

        let text = render_outcome(&outcome, false);

        assert_eq!(
            text,
            "合計2件の候補を表示しています。\n\n名前の候補 (2件)\n  田中 太郎\t22画\t末吉\n  田中 花子\t19画\t凶\n"
        );
    }

    #[test]
    fn test_render_filtered_title() {
        let outcome = engine()
            .search(
                &SearchQuery {
                    family_name: "田中".to_string(),
                    filter_terms: vec!["花".to_string()],
                    luck: None,
                },
                &mut NoopDiagnostics,
            )
            .unwrap();

        let text = render_outcome(&outcome, true);

        assert!(text.contains("「花」を使った名前の候補 (1件)"));
        assert!(text.contains("人格… 11画（大吉）"));
    }

    #[test]
    fn test_render_candidate() {
        let candidate = engine()
            .evaluate("田中", "太郎", &mut NoopDiagnostics)
            .unwrap();
        let text = render_candidate(&candidate);
        assert_eq!(
            text,
            "田中 太郎 の五格\n  天格… 9画（吉）\n  人格… 8画（大吉）\n  地格… 13画（大吉）\n  外格… 14画（末吉）\n  総格… 22画（末吉）\n"
        );
    }

    #[test]
    fn test_render_ranks_lists_every_tier() {
        let text = render_ranks(&RankTable::standard());
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("大吉\tdaikichi\t(score 4)\t3 5 6 7 8 11"));
        assert!(text.contains("凶\tkyo\t(score 0)\t2 12 19 20 27 50"));
    }
}
