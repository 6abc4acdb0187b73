//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
/// Default rate constant of [`Smooth`], per second.
pub const DEFAULT_RATE: f32 = 14.0;
/// Default distance under which [`Smooth`] snaps to its target.
pub const DEFAULT_THRESHOLD: f32 = 0.01;

/// Exponential approach of a displayed value toward a target.
///
/// Each [`Smooth::update`] moves the value by `(target - value) * (1 - e^(-rate * dt))`,
/// which is frame-rate independent. Once the remaining distance drops under the
/// threshold the value snaps to the target exactly and the animation settles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Smooth {
    value: f32,
    target: f32,
    rate: f32,
    threshold: f32,
}

impl Default for Smooth {
    fn default() -> Self { Self::new(0.0) }
}

impl Smooth {
    /// Creates a settled animation at `value`.
    pub fn new(value: f32) -> Self { Self { value, target: value, rate: DEFAULT_RATE, threshold: DEFAULT_THRESHOLD } }

    /// Replaces the rate constant. Non-positive rates fall back to [`DEFAULT_RATE`].
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = if rate.is_finite() && rate > 0.0 { rate } else { DEFAULT_RATE };
        self
    }

    /// Replaces the snap threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.abs();
        self
    }

    /// Displayed value.
    pub fn value(&self) -> f32 { self.value }

    /// Value being approached.
    pub fn target(&self) -> f32 { self.target }

    /// Retargets the animation. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Moves both the value and the target to `value`.
    pub fn jump_to(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
        }
    }

    /// Returns `true` while the value has not reached the target.
    pub fn is_animating(&self) -> bool { self.value != self.target }

    /// Advances the animation by `dt` seconds at `rate`, which replaces the rate constant
    /// the same way [`Smooth::with_rate`] does. Returns `true` while still animating.
    pub fn update_with(&mut self, dt: f32, rate: f32) -> bool {
        *self = self.with_rate(rate);
        self.update(dt)
    }

    /// Advances the animation by `dt` seconds. Returns `true` while still animating.
    pub fn update(&mut self, dt: f32) -> bool {
        let delta = self.target - self.value;
        if !delta.is_finite() || delta.abs() < self.threshold {
            self.value = self.target;
            return false;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return true;
        }
        self.value += delta * (1.0 - (-self.rate * dt).exp());
        if (self.target - self.value).abs() < self.threshold {
            self.value = self.target;
            return false;
        }
        true
    }
}
