use std::sync::mpsc::Sender;
use std::time::Instant;

use chess::{Board, ChessMove, MoveGen};
use evaluation::{CoverageEvaluator, MoveEvaluator};
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use uci::{commands::GoParams, commands::Info, move_to_uci, UciOutput, NULL_MOVE};

use crate::EngineConfig;

/// A legal move and the evaluator's score for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: ChessMove,
    pub score: i32,
}

/// One-ply greedy engine: scores every legal move and plays the best one.
pub struct Engine {
    config: EngineConfig,
    evaluator: Box<dyn MoveEvaluator>,

    /// The position we are choosing a move for
    board: Board,

    /// Worker pool for scoring candidates; `None` scores them on the calling thread
    pool: Option<ThreadPool>,

    /// Result of a `go infinite`, announced on `stop`
    held_best_move: Option<String>,
}

impl Engine {
    pub fn new(config: &EngineConfig, evaluator: Box<dyn MoveEvaluator>) -> Self {
        let mut instance = Self {
            config: config.clone(),
            evaluator,
            board: Board::default(),
            pool: None,
            held_best_move: None,
        };

        instance.configure_pool();
        instance
    }

    /// Builds an engine around the coverage evaluator described by `config`.
    pub fn with_coverage(config: &EngineConfig) -> Self {
        let evaluator = CoverageEvaluator::new(config.get_eval_config());
        Self::new(config, Box::new(evaluator))
    }

    pub fn configure(&mut self, config: &EngineConfig) {
        let old_threads = self.config.threads.value;
        self.config = config.clone();
        self.evaluator.configure(&config.get_eval_config());

        if old_threads != config.threads.value {
            self.configure_pool();
        }
    }

    fn configure_pool(&mut self) {
        let threads = self.config.threads.value;
        if threads <= 1 {
            self.pool = None;
            return;
        }

        self.pool = match ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                debug!("Falling back to a single thread: {}", e);
                None
            }
        };
    }

    pub fn name(&self) -> String {
        format!("Greedy ({})", self.evaluator.name())
    }

    pub fn new_game(&mut self) {
        self.board = Board::default();
        self.held_best_move = None;
    }

    pub fn set_position(&mut self, board: Board) {
        self.board = board;
        self.held_best_move = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Scores every legal move (or only those named in `search_moves`) in
    /// move-generation order.
    pub fn score_moves(&self, search_moves: Option<&[String]>) -> Vec<ScoredMove> {
        let candidates: Vec<ChessMove> = MoveGen::new_legal(&self.board)
            .filter(|m| search_moves.is_none_or(|allowed| allowed.contains(&move_to_uci(*m))))
            .collect();

        let evaluator = self.evaluator.as_ref();
        let root = self.board;

        let score = |mv: &ChessMove| {
            // Every worker scores its own copy of the root
            let board = root;
            ScoredMove {
                mv: *mv,
                score: evaluator.evaluate_move(&board, *mv),
            }
        };

        match &self.pool {
            Some(pool) => pool.install(|| candidates.par_iter().map(score).collect()),
            None => candidates.iter().map(score).collect(),
        }
    }

    pub fn search(
        &mut self,
        params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Option<(ChessMove, i32)> {
        let start_time = Instant::now();
        let scored = self.score_moves(params.search_moves.as_deref());

        let mut best: Option<ScoredMove> = None;
        for candidate in &scored {
            debug!("Move: {}, Score: {}", candidate.mv, candidate.score);

            // Strict comparison keeps the first of equally scored moves
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(*candidate);
            }
        }

        let best = best?;

        if let Some(output) = output {
            let elapsed = start_time.elapsed();
            let nodes = scored.len() as u32;
            let nps = (nodes as f32 / elapsed.as_secs_f32().max(1e-6)) as u32;

            let _ = output.send(UciOutput::Info(Info {
                depth: 1,
                nodes,
                nodes_per_second: nps,
                time: elapsed.as_millis() as u32,
                pv: vec![move_to_uci(best.mv)],
                score: best.score,
            }));
        }

        Some((best.mv, best.score))
    }

    /// Answers `go` with the move to announce as `bestmove` (`0000` without a
    /// legal move). An infinite search holds its answer until [`Engine::stop`].
    pub fn go(&mut self, params: &GoParams, output: Option<&Sender<UciOutput>>) -> Option<String> {
        let best_move = self
            .search(params, output)
            .map(|(mv, _)| move_to_uci(mv))
            .unwrap_or_else(|| NULL_MOVE.to_string());

        if params.infinite {
            debug!("Holding {} until stop", best_move);
            self.held_best_move = Some(best_move);
            return None;
        }

        Some(best_move)
    }

    /// Releases the move held by an infinite search, if any.
    pub fn stop(&mut self) -> Option<String> {
        self.held_best_move.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation::EvalConfig;
    use std::sync::mpsc::channel;

    fn engine_at(fen: &str, threads: usize) -> Engine {
        let mut config = EngineConfig::default();
        config.threads.value = threads;

        let mut engine = Engine::with_coverage(&config);
        engine.set_position(fen.parse().unwrap());
        engine
    }

    #[test]
    fn test_takes_hanging_queen() {
        let mut engine = engine_at("7k/8/8/8/3q4/8/8/K2R4 w - - 0 1", 1);
        let (mv, _) = engine.search(&GoParams::default(), None).unwrap();
        assert_eq!(mv.to_string(), "d1d4");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let sequential = engine_at(fen, 1).score_moves(None);
        let parallel = engine_at(fen, 4).score_moves(None);

        assert!(!sequential.is_empty());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_first_best_wins_ties() {
        let mut engine = engine_at(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            1,
        );
        let scored = engine.score_moves(None);
        let max = scored.iter().map(|s| s.score).max().unwrap();
        let first = scored.iter().find(|s| s.score == max).unwrap();

        let (mv, score) = engine.search(&GoParams::default(), None).unwrap();
        assert_eq!(mv, first.mv);
        assert_eq!(score, max);
    }

    #[test]
    fn test_search_moves_restricts_candidates() {
        let mut engine = engine_at(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            1,
        );
        let params = GoParams {
            search_moves: Some(vec!["a2a3".to_string()]),
            ..Default::default()
        };

        let (mv, _) = engine.search(&params, None).unwrap();
        assert_eq!(mv.to_string(), "a2a3");
    }

    #[test]
    fn test_no_legal_moves() {
        // Black is checkmated
        let mut engine = engine_at("7k/6Q1/5K2/8/8/8/8/8 b - - 0 1", 1);
        assert!(engine.search(&GoParams::default(), None).is_none());
    }

    #[test]
    fn test_reports_info() {
        let mut engine = engine_at(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            1,
        );
        let (tx, rx) = channel();

        let (mv, score) = engine.search(&GoParams::default(), Some(&tx)).unwrap();
        drop(tx);

        let Ok(UciOutput::Info(info)) = rx.recv() else {
            panic!("Expected Info")
        };
        assert_eq!(info.depth, 1);
        assert_eq!(info.nodes, 20);
        assert_eq!(info.score, score);
        assert_eq!(info.pv, vec![mv.to_string()]);
    }

    #[test]
    fn test_root_is_untouched() {
        let mut engine = engine_at(
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            2,
        );
        let before = *engine.board();

        engine.search(&GoParams::default(), None);
        assert_eq!(*engine.board(), before);
    }

    #[test]
    fn test_go_answers_immediately() {
        let mut engine = engine_at("7k/8/8/8/3q4/8/8/K2R4 w - - 0 1", 1);
        assert_eq!(engine.go(&GoParams::default(), None).as_deref(), Some("d1d4"));
        assert!(engine.stop().is_none());
    }

    #[test]
    fn test_go_infinite_waits_for_stop() {
        let mut engine = engine_at("7k/8/8/8/3q4/8/8/K2R4 w - - 0 1", 1);
        let params = GoParams {
            infinite: true,
            ..Default::default()
        };

        assert!(engine.go(&params, None).is_none());
        assert_eq!(engine.stop().as_deref(), Some("d1d4"));
        assert!(engine.stop().is_none());
    }

    #[test]
    fn test_go_infinite_without_moves() {
        let mut engine = engine_at("7k/6Q1/5K2/8/8/8/8/8 b - - 0 1", 1);
        let params = GoParams {
            infinite: true,
            ..Default::default()
        };

        assert!(engine.go(&params, None).is_none());
        assert_eq!(engine.stop().as_deref(), Some(NULL_MOVE));
    }

    #[test]
    fn test_new_position_drops_held_move() {
        let mut engine = engine_at("7k/8/8/8/3q4/8/8/K2R4 w - - 0 1", 1);
        let params = GoParams {
            infinite: true,
            ..Default::default()
        };

        engine.go(&params, None);
        engine.set_position(Board::default());
        assert!(engine.stop().is_none());
    }

    struct FixedEvaluator {
        configured: usize,
    }

    impl MoveEvaluator for FixedEvaluator {
        fn name(&self) -> String {
            format!("Fixed {}", self.configured)
        }

        fn evaluate_move(&self, _board: &Board, _mv: ChessMove) -> i32 {
            0
        }

        fn configure(&mut self, _config: &EvalConfig) {
            self.configured += 1;
        }
    }

    #[test]
    fn test_configure_keeps_evaluator() {
        let config = EngineConfig::default();
        let mut engine = Engine::new(&config, Box::new(FixedEvaluator { configured: 0 }));

        engine.configure(&config);
        assert_eq!(engine.name(), "Greedy (Fixed 1)");
    }

    #[test]
    fn test_configure_applies_edge_rule() {
        let mut engine = engine_at("7k/8/8/8/8/8/8/K5R1 w - - 0 1", 1);
        let strict = engine.score_moves(None);

        let mut config = EngineConfig::default();
        config.strict_edges.value = false;
        config.threads.value = 2;
        engine.configure(&config);

        let linear = engine.score_moves(None);
        assert_eq!(strict.len(), linear.len());
        assert_ne!(strict, linear);
    }
}
