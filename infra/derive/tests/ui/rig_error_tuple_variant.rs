use rig_derive::rig_error;

#[rig_error]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
