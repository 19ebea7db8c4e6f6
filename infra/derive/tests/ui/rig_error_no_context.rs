use rig_derive::rig_error;

#[rig_error]
pub enum FetchError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
