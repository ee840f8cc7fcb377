//! Stage 7: procedural film grain.
//!
//! Value-noise fBm sampled per channel, modulated by the luminance density
//! curve and the clumping mask. Everything is a pure function of pixel
//! coordinates and seeds, so identical inputs give identical grain.

use ndarray::Zip;

use crate::frame::Image;
use crate::preset::curves::sample_lut;
use crate::preset::grain::{Grain, GrainChannel, NoiseKind};

/// Master amplitude: grain intensity 1.0 displaces a pixel by at most
/// roughly this much before the density/clump masks.
const GRAIN_AMPLITUDE: f32 = 0.12;

/// Integer lattice hash mapped to [-1, 1].
#[inline]
fn hash(x: i64, y: i64, seed: u32) -> f32 {
    let mut h = seed.wrapping_mul(0x9e37_79b9);
    h ^= (x as u32).wrapping_mul(0x85eb_ca6b);
    h ^= (y as u32).wrapping_mul(0x27d4_eb2f);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    (h as f32 / u32::MAX as f32) * 2.0 - 1.0
}

#[inline]
fn smooth(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// One octave of value noise at a continuous coordinate. `softness`
/// blends between the raw lattice value (hard, blocky grains) and the
/// smoothly interpolated field.
fn value_noise(x: f32, y: f32, seed: u32, softness: f32) -> f32 {
    let x0 = x.floor();
    let y0 = y.floor();
    let ix = x0 as i64;
    let iy = y0 as i64;

    let hard = hash(ix, iy, seed);
    if softness <= 0.0 {
        return hard;
    }

    let fx = smooth(x - x0);
    let fy = smooth(y - y0);
    let n00 = hard;
    let n10 = hash(ix + 1, iy, seed);
    let n01 = hash(ix, iy + 1, seed);
    let n11 = hash(ix + 1, iy + 1, seed);
    let soft = n00 * (1.0 - fx) * (1.0 - fy)
        + n10 * fx * (1.0 - fy)
        + n01 * (1.0 - fx) * fy
        + n11 * fx * fy;

    hard + (soft - hard) * softness.clamp(0.0, 1.0)
}

/// Multi-octave sample per the preset's noise descriptor.
fn sample_noise(grain: &Grain, x: f32, y: f32, seed: u32, softness: f32) -> f32 {
    let noise = &grain.noise;
    let octaves = match noise.kind {
        NoiseKind::Value => 1,
        NoiseKind::Fractal => noise.octaves.max(1),
    };

    let mut amplitude = 1.0f32;
    let mut frequency = 1.0f32;
    let mut total = 0.0f32;
    let mut weight = 0.0f32;
    for octave in 0..octaves {
        total += value_noise(
            x * frequency,
            y * frequency,
            seed.wrapping_add(octave),
            softness,
        ) * amplitude;
        weight += amplitude;
        amplitude *= noise.persistence;
        frequency *= noise.lacunarity;
    }
    total / weight.max(1e-6)
}

/// Effective seed offset for temporal refresh: still frames are bit-stable,
/// video advances once per `refresh_every` frames.
fn temporal_offset(grain: &Grain, frame: u64) -> u32 {
    if grain.temporal.enabled {
        (frame / grain.temporal.refresh_every.max(1) as u64) as u32
    } else {
        0
    }
}

/// Luma density response sampled into a 256-entry LUT, once per render.
fn build_density_lut(grain: &Grain) -> [f32; 256] {
    let mut lut = [0.0f32; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = grain.density_at(i as f32 / 255.0);
    }
    lut
}

pub fn apply(image: &mut Image, grain: &Grain, frame: u64) {
    if !grain.enabled || grain.global_intensity <= 0.0 {
        return;
    }

    let lum = image.luminance();
    let density = build_density_lut(grain);
    let seed_offset = temporal_offset(grain, frame);

    let channels = [
        (&grain.channels.red, grain.chroma_shift[0], 0u32),
        (&grain.channels.green, grain.chroma_shift[1], 1u32),
        (&grain.channels.blue, grain.chroma_shift[2], 2u32),
    ];
    let planes = [&mut image.red, &mut image.green, &mut image.blue];

    for ((channel, shift, salt), plane) in channels.into_iter().zip(planes) {
        apply_channel(plane, &lum, grain, channel, &density, shift, salt, seed_offset);
    }

    if grain.color_jitter > 0.0 {
        apply_color_jitter(image, grain, seed_offset);
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_channel(
    plane: &mut ndarray::Array2<f32>,
    lum: &ndarray::Array2<f32>,
    grain: &Grain,
    channel: &GrainChannel,
    density: &[f32; 256],
    chroma_shift: f32,
    salt: u32,
    seed_offset: u32,
) {
    let intensity = grain.global_intensity.max(0.0) * channel.intensity.max(0.0);
    if intensity <= 0.0 {
        return;
    }

    let freq = grain.noise.base_frequency / channel.size.max(0.1);
    let seed = channel
        .seed
        .wrapping_add(salt.wrapping_mul(0x51_7cc1))
        .wrapping_add(seed_offset);
    let clump_seed = seed ^ 0x9e37_79b9;
    let clump_strength = grain.clump.strength.clamp(0.0, 1.0);
    let clump_scale = grain.clump.scale.max(1.0);
    let amplitude = intensity * GRAIN_AMPLITUDE;

    Zip::indexed(plane).and(lum).par_for_each(|(y, x), v, &l| {
        let sx = x as f32 + chroma_shift;
        let sy = y as f32 + chroma_shift * 0.5;
        let mut n = sample_noise(grain, sx * freq, sy * freq, seed, channel.softness);

        if clump_strength > 0.0 {
            let cm = value_noise(
                x as f32 / clump_scale,
                y as f32 / clump_scale,
                clump_seed,
                1.0,
            );
            n *= (1.0 + clump_strength * cm).max(0.0);
        }

        *v = (*v + n * amplitude * sample_lut(density, l)).clamp(0.0, 1.0);
    });
}

/// Small decorrelated per-pixel offsets, one hash per channel.
fn apply_color_jitter(image: &mut Image, grain: &Grain, seed_offset: u32) {
    let amount = grain.color_jitter * 0.04;
    let base = grain
        .channels
        .green
        .seed
        .wrapping_add(seed_offset)
        .wrapping_add(0x0dd_ba11);

    let planes = [&mut image.red, &mut image.green, &mut image.blue];
    for (i, plane) in planes.into_iter().enumerate() {
        let seed = base.wrapping_add(i as u32 * 0x6b43_a9b5);
        Zip::indexed(plane).par_for_each(|(y, x), v| {
            let j = hash(x as i64, y as i64, seed);
            *v = (*v + j * amount).clamp(0.0, 1.0);
        });
    }
}
