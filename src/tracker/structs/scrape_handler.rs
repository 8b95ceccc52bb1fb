/// Pipeline stage aggregating swarm statistics for scrape requests.
#[derive(Debug)]
pub struct ScrapeHandler;
