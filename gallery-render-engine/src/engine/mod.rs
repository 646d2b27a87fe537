pub mod assets;
pub mod camera;
pub mod interaction;
pub mod loading;
pub mod scene;
pub mod view;
pub mod viewport;
