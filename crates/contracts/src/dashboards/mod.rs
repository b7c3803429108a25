pub mod d400_document_stats;
pub mod d401_proposer_report;
