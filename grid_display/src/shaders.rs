// shaders.rs - GLSL bodies for the grid program (version line added by the backend)

pub const VERTEX: &str = r#"
in vec2 a_position;
in float a_point_size;
uniform vec2 u_resolution;
uniform float u_pixels_per_point;

void main() {
    vec2 clip = a_position / u_resolution * 2.0 - 1.0;
    gl_Position = vec4(clip * vec2(1.0, -1.0), 0.0, 1.0);
    gl_PointSize = a_point_size * u_pixels_per_point;
}
"#;

pub const FRAGMENT: &str = r#"
precision mediump float;
uniform vec4 u_color;
out vec4 out_color;

void main() {
    out_color = u_color;
}
"#;

pub const A_POSITION: &str = "a_position";
pub const A_POINT_SIZE: &str = "a_point_size";
pub const U_RESOLUTION: &str = "u_resolution";
pub const U_PIXELS_PER_POINT: &str = "u_pixels_per_point";
pub const U_COLOR: &str = "u_color";
