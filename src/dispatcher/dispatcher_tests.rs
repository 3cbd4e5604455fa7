/*
 * Unit tests for the dispatcher
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_cost_idle_elevator
 * - test_cost_approaching_elevator
 * - test_cost_receding_elevator_pays_double_detour
 * - test_select_cheapest
 * - test_select_tie_goes_to_lowest_id
 * - test_assign_queues_load_stop
 * - test_assign_colocated_idle_elevator_loads_immediately
 * - test_assign_colocated_rider_held_to_requested_direction
 * - test_assign_selected_cost_is_minimal
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::dispatcher::assign;
    use crate::dispatcher::dispatcher::{cost, select};
    use crate::elevator::Elevator;
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{PickupRequest, Stop as Goal};
    use crate::simulation::test_support::{NoopReporter, ScriptedResolver};
    use crate::simulation::SimEvent;
    use crossbeam_channel::unbounded;

    fn elevator_at(id: u8, floor: u8, goals: &[Goal]) -> Elevator {
        let mut elevator = Elevator::new(id, floor, 10);
        for goal in goals {
            elevator.enqueue(*goal);
        }
        elevator
    }

    #[test]
    fn test_cost_idle_elevator() {
        // Purpose: An idle elevator only pays the direct distance

        // Arrange
        let elevator = elevator_at(1, 8, &[]);

        // Act & Assert
        assert_eq!(cost(&elevator, 3), 5);
        assert_eq!(cost(&elevator, 8), 0);
        assert_eq!(cost(&elevator, 10), 2);
    }

    #[test]
    fn test_cost_approaching_elevator() {
        // Purpose: No detour when the elevator is already heading towards the pickup

        // Arrange
        let going_up = elevator_at(1, 2, &[Goal::unload(9)]);
        let going_down = elevator_at(2, 9, &[Goal::unload(1)]);

        // Act & Assert
        assert_eq!(going_up.direction(), Up);
        assert_eq!(cost(&going_up, 6), 4);
        assert_eq!(cost(&going_up, 2), 0);
        assert_eq!(going_down.direction(), Down);
        assert_eq!(cost(&going_down, 4), 5);
    }

    #[test]
    fn test_cost_receding_elevator_pays_double_detour() {
        // Purpose: Finishing the current leg first counts twice

        // Arrange
        let going_up = elevator_at(1, 8, &[Goal::unload(10)]);
        let going_down = elevator_at(2, 3, &[Goal::unload(1)]);

        // Act & Assert
        // |8 - 3| + 2 * |10 - 8|
        assert_eq!(cost(&going_up, 3), 9);
        // |3 - 7| + 2 * |1 - 3|
        assert_eq!(cost(&going_down, 7), 8);
    }

    #[test]
    fn test_select_cheapest() {
        // Purpose: The elevator with the lowest cost wins

        // Arrange
        let elevators = vec![
            elevator_at(1, 1, &[]),
            elevator_at(2, 8, &[Goal::unload(10)]),
            elevator_at(3, 5, &[]),
        ];

        // Act
        let selected = select(&elevators, 6);

        // Assert
        assert_eq!(selected, Some((2, 1)));
    }

    #[test]
    fn test_select_tie_goes_to_lowest_id() {
        // Purpose: Equal costs are broken by id, not by position in the bank

        // Arrange
        let elevators = vec![
            elevator_at(4, 3, &[]),
            elevator_at(2, 7, &[]),
            elevator_at(3, 3, &[]),
        ];

        // Act
        let selected = select(&elevators, 5);

        // Assert
        assert_eq!(selected, Some((1, 2)));
        assert!(select(&[], 5).is_none());
    }

    #[test]
    fn test_assign_queues_load_stop() {
        // Purpose: A distant pickup becomes a Load goal and starts the elevator

        // Arrange
        let mut elevators = vec![elevator_at(1, 1, &[]), elevator_at(2, 9, &[])];
        let mut resolver = ScriptedResolver::new(&[]);
        let (event_tx, event_rx) = unbounded::<SimEvent>();
        let mut reporter = event_tx;
        let request = PickupRequest { floor: 4, direction: Up };

        // Act
        let id = assign(&mut elevators, &request, &mut resolver, &mut reporter).unwrap();

        // Assert
        assert_eq!(id, 1);
        assert_eq!(elevators[0].goals().to_vec(), vec![Goal::load(4)]);
        assert_eq!(elevators[0].direction(), Up);
        assert!(elevators[1].goals().is_empty());
        assert!(resolver.queries.is_empty());
        assert_eq!(
            event_rx.try_recv().unwrap(),
            SimEvent::PickupAssigned { elevator: 1, floor: 4, cost: 3 }
        );
    }

    #[test]
    fn test_assign_colocated_idle_elevator_loads_immediately() {
        // Purpose: An idle elevator on the pickup floor asks for the destination at once

        // Arrange
        let mut elevators = vec![elevator_at(1, 1, &[]), elevator_at(2, 6, &[])];
        let mut resolver = ScriptedResolver::new(&[2]);
        let request = PickupRequest { floor: 6, direction: Down };

        // Act
        let id = assign(&mut elevators, &request, &mut resolver, &mut NoopReporter).unwrap();

        // Assert
        assert_eq!(id, 2);
        assert_eq!(resolver.queries.len(), 1);
        assert_eq!(resolver.queries[0].floor, 6);
        assert_eq!(resolver.queries[0].required, Some(Down));
        assert_eq!(elevators[1].goals().to_vec(), vec![Goal::unload(2)]);
        assert_eq!(elevators[1].direction(), Down);
    }

    #[test]
    fn test_assign_colocated_rider_held_to_requested_direction() {
        // Purpose: A rider who called the car going up may not ask for a lower floor

        // Arrange
        let mut elevators = vec![elevator_at(1, 5, &[])];
        let mut resolver = ScriptedResolver::new(&[2, 8]);
        let request = PickupRequest { floor: 5, direction: Up };

        // Act
        assign(&mut elevators, &request, &mut resolver, &mut NoopReporter).unwrap();

        // Assert
        assert_eq!(resolver.queries.len(), 2);
        assert_eq!(resolver.queries[0].required, Some(Up));
        assert_eq!(resolver.rejections.len(), 1);
        assert_eq!(elevators[0].goals().to_vec(), vec![Goal::unload(8)]);
        assert_eq!(elevators[0].direction(), Up);
    }

    #[test]
    fn test_assign_selected_cost_is_minimal() {
        // Purpose: For every pickup floor the chosen elevator costs no more than any other

        // Arrange
        let bank = vec![
            elevator_at(1, 2, &[Goal::unload(7)]),
            elevator_at(2, 9, &[Goal::unload(4), Goal::unload(1)]),
            elevator_at(3, 5, &[]),
            elevator_at(4, 10, &[Goal::load(6)]),
        ];

        for floor in 1..=10 {
            // Act
            let mut elevators = bank.clone();
            let request = PickupRequest { floor, direction: if floor == 10 { Down } else { Up } };
            let mut resolver = ScriptedResolver::new(&[if request.direction == Up { 10 } else { 1 }]);
            let id = assign(&mut elevators, &request, &mut resolver, &mut NoopReporter).unwrap();

            // Assert
            let chosen = bank.iter().find(|e| e.id() == id).unwrap();
            for other in &bank {
                let (chosen_cost, other_cost) = (cost(chosen, floor), cost(other, floor));
                assert!(chosen_cost <= other_cost);
                if chosen_cost == other_cost {
                    assert!(chosen.id() <= other.id());
                }
            }
        }
    }
}
