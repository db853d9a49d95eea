use rocket_logbook::*;

const SAMPLE_FLIGHT_CSV: &str = "\
time_ms,pressure,reserved,accel_x,accel_y,accel_z
0,405300,0,0,0,256
100,405290,0,3,-2,1380
200,405210,0,5,-4,1395
300,405060,0,4,-3,1360
400,404840,0,2,-2,780
500,404580,0,1,-1,40
700,404180,0,0,0,30
900,403900,0,0,0,25
1100,403750,0,0,0,20
1300,403700,0,0,0,18
1500,403720,0,0,0,15
1800,403900,0,0,0,12";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let mut store = MemoryStore::new();

    let rocket = RocketRecord {
        id: "r1".to_string(),
        name: "Alpha III".to_string(),
        dry_mass_g: "200".to_string(),
        length_cm: "60".to_string(),
        diameter_cm: "5".to_string(),
        nose_cone_type: NoseConeType::Ogive,
        nose_cone_length_cm: "15".to_string(),
        cog_cm: "35".to_string(),
        num_fins: "3".to_string(),
        fin_root_chord_cm: "8".to_string(),
        fin_tip_chord_cm: "4".to_string(),
        fin_semi_span_cm: "6".to_string(),
        fin_sweep_dist_cm: "2".to_string(),
        nose_to_fin_dist_cm: "40".to_string(),
    };
    let motor = MotorRecord {
        id: "m1".to_string(),
        name: "D20".to_string(),
        initial_mass_g: "60".to_string(),
        propellant_mass_g: "25".to_string(),
        avg_thrust_n: "20".to_string(),
        peak_thrust_n: Some("25".to_string()),
        peak_time_s: None,
        burn_time_s: "1.2".to_string(),
    };

    let mut rockets: Collection<RocketRecord> = Collection::load(&store, ROCKETS_COLLECTION)?;
    let mut motors: Collection<MotorRecord> = Collection::load(&store, MOTORS_COLLECTION)?;
    let mut flights: Collection<FlightRecord> = Collection::load(&store, FLIGHTS_COLLECTION)?;
    rockets.upsert(rocket.clone());
    motors.upsert(motor.clone());

    let mut flight = plan_flight(
        "f1",
        "2024-06-01T10:00:00Z",
        &rocket,
        &motor,
        DEFAULT_LAUNCH_ROD_LENGTH,
    )?;

    println!("--- Pre-Flight Estimate: {} / {} ---", rocket.name, motor.name);
    match flight.estimates.as_ref() {
        Some(Estimate::Feasible(figures)) => {
            println!("Est. Altitude: {:.2} m", figures.total_altitude);
            println!("Est. Max Velocity: {:.2} m/s", figures.max_velocity);
            println!("Stability: {:.2} cal", figures.stability_margin_calibers);
            println!("Rod Exit Velocity: {:.2} m/s", figures.launch_rod_exit_velocity);
            println!("Min Thrust Needed: {:.2} N", figures.min_thrust_needed);
            println!("T/W Ratio: {:.2}", figures.thrust_to_weight_ratio);
            println!("Loaded Mass: {:.1} g", figures.loaded_mass * 1000.0);
        }
        Some(infeasible) => println!("{}", infeasible),
        None => println!("No estimate recorded."),
    }

    let actuals = analyze_flight(&mut flight, SAMPLE_FLIGHT_CSV)?;
    flight.close_out(FlightStatus::Success, "Straight boost, gentle recovery.");

    println!("\n--- Post-Flight Actuals ---");
    println!("Max Altitude: {:.2} m", actuals.max_altitude);
    println!("Max G-Force: {:.2} G", actuals.max_g_force);
    println!("Top Speed: {:.2} m/s", actuals.max_velocity);
    println!(
        "Boost: {:.2} m gained in {} ms",
        actuals.boost_altitude_gain, actuals.boost_time_ms
    );
    println!(
        "Coast: {:.2} m gained in {} ms",
        actuals.coast_altitude_gain, actuals.coast_time_ms
    );
    println!("Apogee at {} ms", actuals.apogee_time_ms);

    flights.upsert(flight);
    rockets.save(&mut store)?;
    motors.save(&mut store)?;
    flights.save(&mut store)?;

    Ok(())
}
