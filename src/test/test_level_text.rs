
mod test {
    use std::collections::BTreeSet;

    use crate::core::*;
    use crate::level_text::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn parse_finds_agent_markers_and_storage(){
        let level = r#"
#############
#p        * #
#     b  b  #
# *         #
#############
"#;
        let board = parse_level(level, Notation::Letters).unwrap();

        assert_eq!(board.width(), 13);
        assert_eq!(board.height(), 5);
        assert_eq!(board.agent(), Position::new(1, 1));
        let markers: Vec<Position> = board.markers().iter().copied().collect();
        assert_eq!(markers, vec![Position::new(6, 2), Position::new(9, 2)]);
        assert_eq!(board.storage_count(), 2);
        assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Wall));
        assert_eq!(board.cell(Position::new(5, 2)), Some(Cell::Open));
    }

    #[test]
    fn missing_agent_is_an_error(){
        let result = parse_level("# b * #", Notation::Letters);

        assert_eq!(result, Err(BoardError::NoAgentFound));
    }

    #[test]
    fn second_agent_is_an_error(){
        let result = parse_level("#p P#", Notation::Letters);

        assert_eq!(result, Err(BoardError::MultipleAgents {
            first: Position::new(1, 0),
            second: Position::new(3, 0),
        }));
    }

    #[test]
    fn uppercase_occupants_sit_on_storage(){
        let board = parse_level("#P B b#", Notation::Letters).unwrap();

        assert_eq!(board.agent(), Position::new(1, 0));
        assert_eq!(board.cell(Position::new(1, 0)), Some(Cell::Storage));
        assert_eq!(board.cell(Position::new(3, 0)), Some(Cell::Storage));
        assert_eq!(board.cell(Position::new(5, 0)), Some(Cell::Open));
        assert_eq!(board.markers_on_storage(), 1);
    }

    #[test]
    fn unknown_symbols_render_as_open_floor(){
        let game = GameTestState::new("#p.x-#");

        game.assert_matches("#p   #");
    }

    #[test]
    fn short_rows_are_padded_with_open_floor(){
        let level = "#####\n#p#\n\n###\r\n";
        let board = parse_level(level, Notation::Letters).unwrap();

        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 3);
        assert_eq!(board.cell(Position::new(4, 1)), Some(Cell::Open));
        assert_eq!(render_board(&board, Notation::Letters), "#####\n#p#  \n###  \n");
    }

    #[test]
    fn render_uses_one_symbol_per_terrain_and_occupant_pair(){
        let level = r#"
##########
#p b B * #
##########
"#;
        let board = parse_level(level, Notation::Letters).unwrap();
        let rendered = render_board(&board, Notation::Letters);
        let symbols: BTreeSet<char> = rendered.chars().filter(|&c| c != '\n').collect();

        assert_eq!(symbols, BTreeSet::from(['#', ' ', 'p', 'b', 'B', '*']));

        let first = board.apply(Direction::Right).unwrap();
        let moved = first.apply(Direction::Right).unwrap();
        let rendered = render_board(&moved, Notation::Letters);
        assert!(rendered.contains(" p"), "{rendered}");
        assert!(rendered.contains("bB"), "{rendered}");
    }

    #[test]
    fn xsb_notation_round_trips_canonical_text(){
        let level = r#"
#######
#@$ .*#
#  +  #
#######
"#;
        assert_eq!(
            parse_level(level, Notation::Xsb),
            Err(BoardError::MultipleAgents {
                first: Position::new(1, 1),
                second: Position::new(3, 2),
            })
        );

        let level = r#"
#######
#@$ .*#
#######
"#;
        let game = GameTestState::with_notation(level, Notation::Xsb);
        game.assert_matches(level);
        assert_eq!(game.board.storage_count(), 2);
        assert_eq!(game.board.markers_on_storage(), 1);
    }

    #[test]
    fn same_board_renders_in_either_notation(){
        let board = parse_level("#pb*B#", Notation::Letters).unwrap();

        assert_eq!(render_board(&board, Notation::Xsb), "#@$.*#\n");
        assert_eq!(
            parse_level(&render_board(&board, Notation::Xsb), Notation::Xsb),
            Ok(board)
        );
    }

    #[test]
    fn directions_decode_in_order_ignoring_case(){
        let directions = parse_direction_sequence("RRdlU").unwrap();

        assert_eq!(directions, vec![
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ]);
        assert_eq!(render_directions(&directions), "RRDLU");
    }

    #[test]
    fn direction_iterator_stops_at_first_bad_symbol(){
        let mut directions = parse_directions("RxR");

        assert_eq!(directions.next(), Some(Ok(Direction::Right)));
        assert_eq!(directions.next(), Some(Err(UnrecognizedSymbol { symbol: 'x' })));
        assert_eq!(directions.next(), None);
    }

    #[test]
    fn bad_symbol_yields_no_partial_sequence(){
        assert_eq!(
            parse_direction_sequence("RRRq"),
            Err(UnrecognizedSymbol { symbol: 'q' })
        );
        assert_eq!(parse_direction_sequence(""), Ok(vec![]));
    }

    #[test]
    fn whitespace_between_moves_is_unrecognized(){
        assert_eq!(
            parse_direction_sequence("R R"),
            Err(UnrecognizedSymbol { symbol: ' ' })
        );
        assert_eq!(
            parse_direction_sequence("R\tD"),
            Err(UnrecognizedSymbol { symbol: '\t' })
        );
        assert_eq!(
            parse_direction_sequence("RD\n"),
            Err(UnrecognizedSymbol { symbol: '\n' })
        );
    }
}
