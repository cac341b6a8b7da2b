//! GLSL fragment sources for GPU hosts.
//!
//! Hosts that composite on the GPU can hand these to their own shader
//! machinery instead of running the CPU transforms per pixel. The text is
//! an input contract: the functions in this crate are the semantic
//! reference, and nothing here compiles or validates the strings. Uniform
//! names match the live instance parameters (`COLORBLIND_MODE` /
//! `MIX_MODE` / `INVERSION_MODE` and `STRENGTH`).

use chroma_core::ShaderFamily;

pub const DALTONISM_SOURCE: &str = r#"
uniform sampler2D tex;
uniform float STRENGTH;
uniform int COLORBLIND_MODE;

void main() {
    vec4 c = texture2D(tex, cogl_tex_coord_in[0].st);

    float L = (17.8824 * c.r) + (43.5161 * c.g) + (4.11935 * c.b);
    float M = (3.45565 * c.r) + (27.1554 * c.g) + (3.86714 * c.b);
    float S = (0.0299566 * c.r) + (0.184309 * c.g) + (1.46709 * c.b);

    float l;
    float m;
    float s;

    if (COLORBLIND_MODE == 0 || COLORBLIND_MODE == 1 || COLORBLIND_MODE == 5) {
        l = 2.02344 * M - 2.52581 * S;
        m = M;
        s = S;
    } else if (COLORBLIND_MODE == 2 || COLORBLIND_MODE == 3 || COLORBLIND_MODE == 6) {
        l = L;
        m = 0.494207 * L + 1.24827 * S;
        s = S;
    } else {
        l = L;
        m = M;
        s = -0.012491378299329402 * L + 0.07203451899279534 * M;
    }

    vec4 error;
    error.r = (0.0809444479 * l) + (-0.130504409 * m) + (0.116721066 * s);
    error.g = (-0.0102485335 * l) + (0.0540193266 * m) + (-0.113614708 * s);
    error.b = (-0.000365296938 * l) + (-0.00412161469 * m) + (0.693511405 * s);

    error = error * STRENGTH + c * (1.0 - STRENGTH);
    error.a = 1.0;

    if (COLORBLIND_MODE > 4) {
        error.a = c.a;
        cogl_color_out = error.rgba;
        return;
    }

    error = (c - error);

    vec4 correction;
    if (COLORBLIND_MODE == 0) {
        correction.r = error.r * 0.56667 + error.g * 0.43333 + error.b * 0.00000;
        correction.g = error.r * 0.55833 + error.g * 0.44267 + error.b * 0.00000;
        correction.b = error.r * 0.00000 + error.g * 0.24167 + error.b * 0.75833;
    } else if (COLORBLIND_MODE == 1) {
        correction.r = error.r * 2.56667 + error.g * 0.43333 + error.b * 0.00000;
        correction.g = error.r * 1.55833 + error.g * 0.44267 + error.b * 0.00000;
        correction.b = error.r * 0.00000 + error.g * 0.24167 + error.b * 0.75833;
    } else if (COLORBLIND_MODE == 2) {
        correction.r = error.r * -0.7 + error.g * 0.0 + error.b * 0.0;
        correction.g = error.r *  0.5 + error.g * 1.0 + error.b * 0.0;
        correction.b = error.r * -0.3 + error.g * 0.0 + error.b * 1.0;
    } else if (COLORBLIND_MODE == 3) {
        correction.r = error.r * -1.5 + error.g * 1.5 + error.b * 0.0;
        correction.g = error.r * -1.5 + error.g * 1.5 + error.b * 0.0;
        correction.b = error.r *  1.5 + error.g * 0.0 + error.b * 0.0;
    } else if (COLORBLIND_MODE == 4) {
        correction.r = error.r * 0.3 + error.g * 0.5 + error.b * 0.4;
        correction.g = error.r * 0.5 + error.g * 0.7 + error.b * 0.3;
        correction.b = error.r * 0.0 + error.g * 0.0 + error.b * 1.0;
    }

    correction = c + correction;
    correction.a = c.a;
    cogl_color_out = correction.rgba;
}
"#;

pub const CHANNEL_MIX_SOURCE: &str = r#"
uniform sampler2D tex;
uniform int MIX_MODE;
uniform float STRENGTH;

void main() {
    vec4 c = texture2D(tex, cogl_tex_coord_in[0].st);
    vec4 m;
    if (MIX_MODE == 0) {
        m = vec4(c.b, c.r, c.g, c.a);
    } else if (MIX_MODE == 1) {
        m = vec4(c.g, c.b, c.r, c.a);
    }
    c = m * STRENGTH + c * (1.0 - STRENGTH);
    cogl_color_out = c;
}
"#;

pub const INVERSION_SOURCE: &str = r#"
uniform sampler2D tex;
uniform int INVERSION_MODE;

void main() {
    vec4 c = texture2D(tex, cogl_tex_coord_in[0].st);
    if (INVERSION_MODE < 2) {
        float white_bias = INVERSION_MODE * c.a * 0.02;
        float m = 1.0 + white_bias;
        float shift = white_bias + c.a - min(c.r, min(c.g, c.b)) - max(c.r, max(c.g, c.b));
        c = vec4(((shift + c.r) / m),
                 ((shift + c.g) / m),
                 ((shift + c.b) / m),
                 c.a);
    } else if (INVERSION_MODE == 2) {
        c = vec4(c.a - c.r, c.a - c.g, c.a - c.b, c.a);
    }

    float gamma = 1.8;
    c.rgb = pow(c.rgb, vec3(1.0 / gamma));

    cogl_color_out = c;
}
"#;

/// Shader text for a family, if it has one. Desaturation uses the host's
/// own primitive.
pub fn shader_source(family: ShaderFamily) -> Option<&'static str> {
    match family {
        ShaderFamily::Daltonism => Some(DALTONISM_SOURCE),
        ShaderFamily::ChannelMixer => Some(CHANNEL_MIX_SOURCE),
        ShaderFamily::Inversion => Some(INVERSION_SOURCE),
        ShaderFamily::Desaturation => None,
    }
}
