use rocket_aerodynamics::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bluewren-class reference rocket: 0.143 m body, ~3.27 m long,
    // 0.9144 m von Karman nose, 0.17 m boattail down to 0.10 m, 4 fins.
    let geometry = RocketGeometry::new(
        3.26535, 0.143, 0.10, 0.17, 0.005, 0.184, 4, 0.0538, 0.02877, 0.143, 0.9144, 2.9161,
    );
    let tables = CorrectionTables::embedded()?;
    let aero = EmpiricalAero::new(geometry, tables);

    println!("Drag curve, sea-level Reynolds numbers, angle of attack 0:");
    println!("{:>6} {:>14} {:>14} {:>10}", "mach", "re_body", "re_fins", "cd");

    for step in 1..=20 {
        let mach = step as f64 * 0.1;
        let velocity = mach * SPEED_OF_SOUND_SEA_LEVEL;
        let re_body = AIR_DENSITY_SEA_LEVEL * velocity * aero.geometry().total_length
            / AIR_VISCOSITY_SEA_LEVEL;
        let re_fins = AIR_DENSITY_SEA_LEVEL * velocity * aero.geometry().fin_midchord_length
            / AIR_VISCOSITY_SEA_LEVEL;

        match aero.drag_coefficient(mach, re_body, re_fins, 0.0) {
            Ok(cd) => println!("{:>6.2} {:>14.3e} {:>14.3e} {:>10.4}", mach, re_body, re_fins, cd),
            Err(e) => println!("{:>6.2} {:>14.3e} {:>14.3e} {}", mach, re_body, re_fins, e),
        }
    }

    Ok(())
}
