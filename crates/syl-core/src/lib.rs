pub mod markup;
pub mod silent;
pub mod sounds;
pub mod syllabify;
pub mod text;
