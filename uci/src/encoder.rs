use super::commands::UciOutput;

pub struct Encoder {}

impl Encoder {
    pub fn encode(&self, response: &UciOutput) -> String {
        match response {
            UciOutput::IdName(name) => format!("id name {}", name),
            UciOutput::IdAuthor(author) => format!("id author {}", author),

            UciOutput::UciOk => "uciok".to_string(),
            UciOutput::ReadyOk => "readyok".to_string(),

            UciOutput::BestMove(best_move) => format!("bestmove {}", best_move),
            UciOutput::Info(info) => {
                format!(
                    "info depth {} multipv 1 score cp {} nodes {} nps {} time {} pv {}",
                    info.depth,
                    info.score,
                    info.nodes,
                    info.nodes_per_second,
                    info.time,
                    info.pv.join(" ")
                )
            }
            UciOutput::Option(option_str) => option_str.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Info;

    #[test]
    fn test_encode_simple() {
        let encoder = Encoder {};
        assert_eq!(encoder.encode(&UciOutput::UciOk), "uciok");
        assert_eq!(encoder.encode(&UciOutput::ReadyOk), "readyok");
        assert_eq!(
            encoder.encode(&UciOutput::IdName("Vantage".to_string())),
            "id name Vantage"
        );
    }

    #[test]
    fn test_encode_bestmove() {
        let encoder = Encoder {};
        assert_eq!(
            encoder.encode(&UciOutput::BestMove("e2e4".to_string())),
            "bestmove e2e4"
        );
    }

    #[test]
    fn test_encode_info() {
        let encoder = Encoder {};
        let info = Info {
            depth: 1,
            nodes: 20,
            nodes_per_second: 4000,
            time: 5,
            pv: vec!["e2e4".to_string()],
            score: -35,
        };
        assert_eq!(
            encoder.encode(&UciOutput::Info(info)),
            "info depth 1 multipv 1 score cp -35 nodes 20 nps 4000 time 5 pv e2e4"
        );
    }
}
