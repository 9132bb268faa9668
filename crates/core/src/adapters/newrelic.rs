pub mod nerdgraph_client;
