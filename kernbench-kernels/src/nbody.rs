//! Gravitational 5-body simulation.
//!
//! Integrates the Sun and the four gas giants forward in fixed time steps
//! with a symplectic kick-drift scheme. The pairwise accumulation order is
//! sequential (`i` ascending, then `j`) and is part of the output contract:
//! floating-point addition is non-associative, so any reordering would drift
//! from the reference energies.

use crate::KernelError;
use std::f64::consts::PI;
use std::io::Write;
use tracing::debug;

/// Solar mass in the simulation's `4 * pi^2` unit system.
pub const SOLAR_MASS: f64 = 4.0 * PI * PI;

/// Velocity scale: reference velocities are given in AU/day.
pub const DAYS_PER_YEAR: f64 = 365.24;

/// Integration time step used by the driver.
const DT: f64 = 0.01;

/// A point mass: position in AU, velocity in AU/day scaled by year length.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    /// Position x component.
    pub x: f64,
    /// Position y component.
    pub y: f64,
    /// Position z component.
    pub z: f64,
    /// Velocity x component.
    pub vx: f64,
    /// Velocity y component.
    pub vy: f64,
    /// Velocity z component.
    pub vz: f64,
    /// Mass in scaled solar-mass units.
    pub mass: f64,
}

impl Body {
    fn new(x: f64, y: f64, z: f64, vx: f64, vy: f64, vz: f64, mass: f64) -> Body {
        Body {
            x,
            y,
            z,
            vx,
            vy,
            vz,
            mass,
        }
    }

    fn sun() -> Body {
        Body::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, SOLAR_MASS)
    }

    fn jupiter() -> Body {
        Body::new(
            4.84143144246472090e+00,
            -1.16032004402742839e+00,
            -1.03622044471123109e-01,
            1.66007664274403694e-03 * DAYS_PER_YEAR,
            7.69901118419740425e-03 * DAYS_PER_YEAR,
            -6.90460016972063023e-05 * DAYS_PER_YEAR,
            9.54791938424326609e-04 * SOLAR_MASS,
        )
    }

    fn saturn() -> Body {
        Body::new(
            8.34336671824457987e+00,
            4.12479856412430479e+00,
            -4.03523417114321381e-01,
            -2.76742510726862411e-03 * DAYS_PER_YEAR,
            4.99852801234917238e-03 * DAYS_PER_YEAR,
            2.30417297573763929e-05 * DAYS_PER_YEAR,
            2.85885980666130812e-04 * SOLAR_MASS,
        )
    }

    fn uranus() -> Body {
        Body::new(
            1.28943695621391310e+01,
            -1.51111514016986312e+01,
            -2.23307578892655734e-01,
            2.96460137564761618e-03 * DAYS_PER_YEAR,
            2.37847173959480950e-03 * DAYS_PER_YEAR,
            -2.96589568540237556e-05 * DAYS_PER_YEAR,
            4.36624404335156298e-05 * SOLAR_MASS,
        )
    }

    fn neptune() -> Body {
        Body::new(
            1.53796971148509165e+01,
            -2.59193146099879641e+01,
            1.79258772950371181e-01,
            2.68067772490389322e-03 * DAYS_PER_YEAR,
            1.62824170038242295e-03 * DAYS_PER_YEAR,
            -9.51592254519715870e-05 * DAYS_PER_YEAR,
            5.15138902046611451e-05 * SOLAR_MASS,
        )
    }
}

/// The fixed 5-body system, momentum not yet zeroed. The Sun is first.
pub fn solar_system() -> [Body; 5] {
    [
        Body::sun(),
        Body::jupiter(),
        Body::saturn(),
        Body::uranus(),
        Body::neptune(),
    ]
}

/// Zero the system's total momentum by adjusting the first body once.
///
/// Invariant afterwards: sum of `mass * velocity` over all bodies is zero.
/// This is applied a single time at initialization, never recomputed.
pub fn offset_momentum(bodies: &mut [Body]) {
    let mut px = 0.0;
    let mut py = 0.0;
    let mut pz = 0.0;

    for body in bodies.iter() {
        px += body.vx * body.mass;
        py += body.vy * body.mass;
        pz += body.vz * body.mass;
    }

    bodies[0].vx = -px / SOLAR_MASS;
    bodies[0].vy = -py / SOLAR_MASS;
    bodies[0].vz = -pz / SOLAR_MASS;
}

/// Advance the system by one time step.
///
/// For every unordered pair `i < j`, both velocities receive the pairwise
/// gravitational kick (Newton's third law in one pass), then every position
/// drifts by `dt * velocity`. O(n^2) pairwise with n fixed at 5.
pub fn advance(bodies: &mut [Body], dt: f64) {
    let n = bodies.len();

    for i in 0..n {
        for j in i + 1..n {
            let dx = bodies[i].x - bodies[j].x;
            let dy = bodies[i].y - bodies[j].y;
            let dz = bodies[i].z - bodies[j].z;

            let dist_sq = dx * dx + dy * dy + dz * dz;
            let dist = dist_sq.sqrt();
            let mag = dt / (dist_sq * dist);

            bodies[i].vx -= dx * bodies[j].mass * mag;
            bodies[i].vy -= dy * bodies[j].mass * mag;
            bodies[i].vz -= dz * bodies[j].mass * mag;

            bodies[j].vx += dx * bodies[i].mass * mag;
            bodies[j].vy += dy * bodies[i].mass * mag;
            bodies[j].vz += dz * bodies[i].mass * mag;
        }
    }

    for body in bodies.iter_mut() {
        body.x += dt * body.vx;
        body.y += dt * body.vy;
        body.z += dt * body.vz;
    }
}

/// Total system energy: kinetic `sum 1/2 m |v|^2` minus pairwise potential
/// `m_i m_j / dist(i, j)`.
pub fn energy(bodies: &[Body]) -> f64 {
    let mut e = 0.0;
    let n = bodies.len();

    for i in 0..n {
        e += 0.5
            * bodies[i].mass
            * (bodies[i].vx * bodies[i].vx
                + bodies[i].vy * bodies[i].vy
                + bodies[i].vz * bodies[i].vz);

        for j in i + 1..n {
            let dx = bodies[i].x - bodies[j].x;
            let dy = bodies[i].y - bodies[j].y;
            let dz = bodies[i].z - bodies[j].z;

            let dist = (dx * dx + dy * dy + dz * dz).sqrt();
            e -= (bodies[i].mass * bodies[j].mass) / dist;
        }
    }

    e
}

/// Run the simulation driver: initial energy, `n` steps, final energy.
pub fn run(n: u32, out: &mut impl Write) -> Result<(), KernelError> {
    debug!(steps = n, dt = DT, "advancing 5-body system");
    let mut bodies = solar_system();
    offset_momentum(&mut bodies);

    writeln!(out, "{:.9}", energy(&bodies))?;

    for _ in 0..n {
        advance(&mut bodies, DT);
    }

    writeln!(out, "{:.9}", energy(&bodies))?;
    Ok(())
}
