//! Property tests for filtering and lazy/eager equivalence.

mod common;

use common::{answer_dir, answer_row, grading_dir, grading_row};
use imobench_ingest::{AnswerBenchQuery, BenchLoader, GradingBenchQuery};
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Algebra", "Combinatorics", "Geometry", "Number theory"];
const SUBCATEGORIES: &[&str] = &["Operation", "Inequality", "Circles"];
const POINTS: &[&str] = &["0", "3", "5", "7", "10", "12", "-1", "x", "", "6.5"];

fn answer_rows() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..CATEGORIES.len(), 0..SUBCATEGORIES.len()), 0..20)
}

fn grading_rows() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..POINTS.len(), 0..3usize), 0..25)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn filtering_is_a_pure_intersection(
        picks in answer_rows(),
        category in 0..CATEGORIES.len(),
        subcategory in 0..SUBCATEGORIES.len(),
    ) {
        let rows: Vec<Vec<String>> = picks
            .iter()
            .enumerate()
            .map(|(i, (c, s))| {
                answer_row(
                    &format!("imo-bench-x-{i:03}"),
                    CATEGORIES[*c],
                    SUBCATEGORIES[*s],
                    "Source",
                )
            })
            .collect();
        let dir = answer_dir(&rows);
        let loader = BenchLoader::new(Some(dir.path())).unwrap();

        let all = loader.load_answerbench(&AnswerBenchQuery::default()).unwrap();
        let expected: Vec<_> = all
            .into_iter()
            .filter(|p| p.category == CATEGORIES[category] && p.subcategory == SUBCATEGORIES[subcategory])
            .collect();
        let filtered = loader
            .load_answerbench(
                &AnswerBenchQuery::default()
                    .with_category(CATEGORIES[category])
                    .with_subcategory(SUBCATEGORIES[subcategory]),
            )
            .unwrap();

        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn lazy_and_eager_agree_when_tolerant(
        picks in grading_rows(),
        min_points in prop::option::of(0i64..11),
        max_points in prop::option::of(0i64..11),
        problem in prop::option::of(0..3usize),
    ) {
        let rows: Vec<Vec<String>> = picks
            .iter()
            .enumerate()
            .map(|(i, (p, problem))| {
                grading_row(&format!("GB-{i:04}"), &format!("PB-{problem}"), POINTS[*p], "Partial")
            })
            .collect();
        let dir = grading_dir(&rows);
        let loader = BenchLoader::new(Some(dir.path())).unwrap();

        let mut query = GradingBenchQuery::default().with_validation(false);
        query.min_points = min_points;
        query.max_points = max_points;
        query.problem_id = problem.map(|p| format!("PB-{p}"));

        let eager = loader.load_gradingbench(&query).unwrap();
        let lazy: Vec<_> = loader
            .iter_gradingbench(query)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        prop_assert_eq!(&eager, &lazy);
    }

    #[test]
    fn tolerant_load_skips_exactly_unreadable_points(picks in grading_rows()) {
        let rows: Vec<Vec<String>> = picks
            .iter()
            .enumerate()
            .map(|(i, (p, _))| grading_row(&format!("GB-{i:04}"), "PB-1", POINTS[*p], "Partial"))
            .collect();
        let dir = grading_dir(&rows);
        let loader = BenchLoader::new(Some(dir.path())).unwrap();

        let entries = loader
            .load_gradingbench(&GradingBenchQuery::default().with_validation(false))
            .unwrap();
        let expected: Vec<String> = picks
            .iter()
            .enumerate()
            .filter(|(_, (p, _))| {
                POINTS[*p]
                    .parse::<i64>()
                    .is_ok_and(|points| (0..=10).contains(&points))
            })
            .map(|(i, _)| format!("GB-{i:04}"))
            .collect();
        let ids: Vec<String> = entries.into_iter().map(|e| e.grading_id).collect();

        prop_assert_eq!(ids, expected);
    }
}
