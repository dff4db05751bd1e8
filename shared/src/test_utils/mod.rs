pub mod mock_graph_client;
pub mod test_logging;
